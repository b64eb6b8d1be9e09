// Escala 6x1: impact analysis for the 6x1 work-schedule survey
//
// This is the library root. `topics` holds the free-text classifier,
// `survey` the chart series built on top of the store.

pub mod config;
pub mod db;
pub mod output;
pub mod status;
pub mod survey;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
