mod database;
mod hashing;
mod jwt;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, Database, bounded};
pub use self::hashing::Hashing;
pub use self::jwt::{ACCESS_TOKEN_TTL, Claims, JwtConfig, REFRESH_TOKEN_TTL, TokenType};
pub use self::myconfig::Config;
