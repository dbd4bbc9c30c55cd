mod lift;
mod lift_type;

pub use lift::LiftRecord;
pub use lift_type::LiftType;
