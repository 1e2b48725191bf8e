mod delay;
mod exchange;

pub use delay::delay;
pub use exchange::{exchange, load_payload, render_response};
