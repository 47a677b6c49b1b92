//! Sqflite Web Worker Library
//!
//! This library provides the background message-handling endpoint used by
//! the sqflite web platform support: a worker that acknowledges every
//! inbound message with a `ready` response. It is a liveness probe, not a
//! database protocol implementation.

pub mod worker;

pub use worker::{
    MessageHandler, ReadyProbe, WorkerConfig, WorkerEndpoint, WorkerError, WorkerHandle,
    WorkerMessage, WorkerResult, READY_KIND,
};
