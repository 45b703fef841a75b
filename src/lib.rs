//! Mood Guide - Conversational mood check-in and self-assessment service
//!
//! This crate serves fixed self-assessment questionnaires, scores
//! multiple-choice answers into a severity band and offers canned coping
//! suggestions over a stateless HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
