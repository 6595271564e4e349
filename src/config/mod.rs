mod model;

pub use model::DemoConfig;
