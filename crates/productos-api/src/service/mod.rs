mod producto;
mod unbound;

pub use self::producto::ProductoDispatcherService;
pub use self::unbound::UnboundProductoHandler;
