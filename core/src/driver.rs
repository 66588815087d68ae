//! Timer-driven draw execution.

use raffle_types::Participant;

use crate::errors::Rejection;
use crate::picker::Picker;
use crate::session::Raffle;

/// Start a draw and sleep through each reveal step until it settles.
///
/// Each step's display update lands before the next wait begins.
pub async fn run_draw<P: Picker>(raffle: &mut Raffle<P>) -> Result<Participant, Rejection> {
    raffle.start_draw()?;
    while let Some(delay) = raffle.pending_delay() {
        tokio::time::sleep(delay).await;
        if let Some(winner) = raffle.advance(delay) {
            return Ok(winner);
        }
    }
    // Only reachable if the picker returned an index outside the roster.
    Err(Rejection::EmptyRoster)
}
