pub mod clock;
pub mod date;
pub mod paths;
pub mod timezone;

pub use clock::{DateSource, FixedDate, SystemClock};
pub use date::parse_date;
pub use paths::{default_base_dir, resolve_base_dir};
pub use timezone::Timezone;
