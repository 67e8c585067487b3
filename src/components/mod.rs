mod bylaw_toggle;
mod checkbox;
mod sidebar;

pub use bylaw_toggle::*;
pub use checkbox::*;
pub use sidebar::*;
