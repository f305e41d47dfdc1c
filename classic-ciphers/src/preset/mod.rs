//! Fixed lookup tables shared by every cipher.

pub mod alphabet;
