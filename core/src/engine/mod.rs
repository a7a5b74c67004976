pub mod limit;
pub mod traits;
pub mod types;

pub use limit::LimitedEngine;
pub use traits::ParseEngine;
pub use types::ParseOutput;
