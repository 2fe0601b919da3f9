#![no_std]

pub mod display;
