pub mod builtin;
pub mod external;
pub mod normalize;
