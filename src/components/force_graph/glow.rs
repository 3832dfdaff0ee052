/// Pulse of the current-location halo at one instant.
///
/// A pure function of the time since the canvas mounted, so any redraw
/// cadence the host picks produces the same animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowFrame {
	pub phase: f64,
	pub opacity: f64,
	pub radius_multiplier: f64,
}

impl GlowFrame {
	pub fn at(elapsed_ms: f64) -> Self {
		let phase = (elapsed_ms / 1000.0).sin() * 0.5 + 0.5;
		Self {
			phase,
			opacity: 0.15 + phase * 0.1,
			radius_multiplier: 2.0 + phase * 0.2,
		}
	}
}
