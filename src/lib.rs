//! Wealth Coach - financial-literacy backend
//!
//! Records learning progress and quiz results, tracks client investments
//! through their lifecycle, and turns that history into ranked quiz,
//! content and investment suggestions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
