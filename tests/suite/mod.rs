mod draw_flow;
mod fairness;
mod render;
