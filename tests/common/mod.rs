pub mod doubles;
pub mod fixtures;

pub use doubles::{GatewayStub, NotifierSpy, RepositoryStub};
pub use fixtures::UserMother;
