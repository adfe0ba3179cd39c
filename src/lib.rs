//! Chit Fund - Rotating-Savings Installment Tracking Backend
//!
//! This crate tracks subscriber accounts in a chit fund scheme: fixed
//! monthly installments over a fixed duration, reconciled against missed
//! months, with a lump-sum payout plus bonus on completion.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
