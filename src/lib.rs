pub mod error;

pub mod service {
    pub mod config_service;
    pub mod file;
    pub mod pandoc;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod dispatcher;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod file;
    pub mod job;
}

pub mod utils {
    pub mod path;
    pub mod utils;
}
