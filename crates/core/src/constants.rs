/// Home currency used when none is configured.
///
/// Net balances are expressed and compared in this currency.
pub const DEFAULT_HOME_CURRENCY: &str = "RUB";

/// Decimal precision for monetary amounts
pub const MONEY_SCALE: u32 = 2;

/// Decimal precision for exchange rates
pub const RATE_SCALE: u32 = 6;

/// How long the provider currency directory stays fresh
pub const CURRENCY_DIRECTORY_TTL_HOURS: i64 = 24;
