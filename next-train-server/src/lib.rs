//! Next-train departure server.
//!
//! A web application that answers: "when must I leave home to catch
//! the next usable train?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod profiles;
pub mod schedule;
pub mod scheduler;
pub mod web;
