// Rules module
// This module exports the independent audit passes over the module tree.

/// Audit for functions and methods lacking any type annotation.
pub mod annotations;

/// Audit for class and function naming conventions.
pub mod naming;
