//! Collection types. Currently home to the linked family only.

pub mod linked;
