//! Lecture Registry - Conference lecture registration service
//!
//! This crate tracks which users hold reservations for which lecture slots,
//! enforcing seat capacity and keeping both sides of the user/lecture
//! relationship in sync.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
