mod domain_resolver;
mod public_ip_provider;

pub use domain_resolver::DomainResolver;
pub use public_ip_provider::PublicIpProvider;
