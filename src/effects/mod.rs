//! Scroll-, pointer-, and visibility-driven visual effects. Each module
//! splits the decision (pure, unit-tested) from the DOM apply step, and
//! each `init` returns a guard whose drop unregisters the wiring.

pub mod navbar_blur;
pub mod parallax;
pub mod reveal;
pub mod tilt;

pub use navbar_blur::NavbarBlur;
pub use parallax::Parallax;
pub use reveal::{FooterParticlesSwap, Reveal, VisibilityOnce};
pub use tilt::HeroTilt;
