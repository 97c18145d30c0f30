pub mod booking;
pub mod city;
