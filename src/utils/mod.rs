// Utilities Module
//
// Common helpers shared by discovery and line synthesis.

pub mod paths;
