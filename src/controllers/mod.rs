pub mod orders_controller;
