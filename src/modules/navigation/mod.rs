pub mod resolver;
pub mod rules;

pub use resolver::NavigationResolver;
pub use rules::NavigationRules;
