// Resume persistence: the store behind the CRUD endpoints and their handlers.
// Every create/update is validated before the store is touched.

pub mod handlers;
pub mod store;
