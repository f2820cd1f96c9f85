pub mod decibel;
