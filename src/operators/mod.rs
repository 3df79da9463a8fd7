//! Reference-element operators: diagonal mass and dense derivative matrices.

mod reference_element;

pub use reference_element::ReferenceElement1D;
