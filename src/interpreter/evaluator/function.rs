/// Arithmetic builtins: `add`, `sub`, `mul` and `div`.
pub mod arithmetic;
/// Equality builtins: `eq` and `neq`.
pub mod compare;
/// The builtin registry.
///
/// Maps case-insensitive method names to their native implementations.
pub mod core;
/// Console input builtins: `readNumber` and `readString`.
pub mod input;
/// Text builtins: `toString` and `concat`.
pub mod text;
