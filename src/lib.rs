#![no_std]

///! (DDS-60)[http://midnightdesignsolutions.com/dds60/] daughterboard driver,
///! (AD9851)[https://www.analog.com/en/products/ad9851.html] DDS core.

pub mod constants;
pub mod register;
pub mod errors;
pub mod frequency;
pub mod device;
