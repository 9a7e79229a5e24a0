pub mod auth_context_resolver;
