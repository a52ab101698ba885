pub mod events;
pub mod factory;
pub mod logs;
pub mod telegram;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum NotifierVia {
    Telegram,
    Logs,
}
