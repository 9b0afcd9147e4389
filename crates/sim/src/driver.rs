//! Timed stepping of a [`Simulation`] on the tokio runtime.
//!
//! The driver owns the simulation exclusively for the duration of the run and
//! calls the synchronous [`Simulation::tick`] inside its loop body, so a new
//! generation is never started before the previous one (and its painting)
//! has finished. Ticks that fall due while a step is still running are
//! skipped, never queued.

use std::future::Future;
use std::time::Duration;

use life_engine::StepResult;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::render::Renderer;
use crate::{RunStatus, Simulation};

/// Steps `sim` every `config().interval_ms` until the run ends or `shutdown`
/// resolves.
///
/// The first step happens one full interval after the call. `on_step` sees
/// every step result together with the simulation state after it. When
/// `shutdown` wins, the simulation is [halted](Simulation::halt) so its final
/// grid stays readable. Returns the status the run ended with; a simulation
/// that was not running is returned as-is without stepping.
pub async fn drive<R, F, S>(sim: &mut Simulation<R>, shutdown: F, mut on_step: S) -> RunStatus
where
    R: Renderer,
    F: Future<Output = ()>,
    S: FnMut(&Simulation<R>, &StepResult),
{
    let period = Duration::from_millis(sim.config().interval_ms);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    while sim.is_running() {
        tokio::select! {
            () = &mut shutdown => {
                log::info!("shutdown requested at generation {}", sim.generation());
                sim.halt();
            }
            _ = ticker.tick() => {
                if let Some(result) = sim.tick() {
                    on_step(sim, &result);
                }
            }
        }
    }
    sim.status()
}
