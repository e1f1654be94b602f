use anyhow::{anyhow, bail};
use serde::{de::Visitor, Deserialize, Serialize};
use serde_with::{DeserializeAs, DeserializeFromStr, SerializeDisplay};
use std::{fmt::Display, marker::PhantomData, str::FromStr};

/// A currency - some type of money.
/// Catalog prices are in USD, so that is the only one budgets may be given in.
#[derive(SerializeDisplay, DeserializeFromStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    USD,
}

impl Currency {
    /// Given an abbreviation/symbol, try to return the corresponding [`Currency`].
    /// Only considers alphabetic characters - `$` is filtered out, for example.
    pub fn from_abbreviation<S: AsRef<str>>(s: S) -> Option<Self> {
        match s
            .as_ref()
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic())
            .collect::<String>()
            .as_str()
        {
            "" | "us" | "usd" => Some(Self::USD),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_abbreviation(s) {
            Some(thing) => Ok(thing),
            None => bail!("no such abbreviation"),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::USD => "USD",
            }
        )
    }
}

/// Convert something like "$312.03" to 312.03
///
/// ## Example
/// ```txt
/// "$312.03" -> 312.03
/// "312.03"  -> 312.03
/// "1,500"   -> 1500.0
/// "-$100"   -> -100.0
/// ```
pub(crate) fn parse_dollars<T: AsRef<str>>(s: T) -> Option<f64> {
    let s = s.as_ref();
    /* a minus sign only counts before the first digit */
    let negative = s.chars().take_while(|c| !c.is_numeric()).any(|c| c == '-');
    let magnitude = s
        .chars()
        .filter(|c| c.is_numeric() || *c == '.')
        .collect::<String>()
        .parse::<f64>()
        .ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Currency ([`Currency`]), and some amount of it ([`f64`]).
/// Money with no currency marker at all is assumed to be USD.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Money(Currency, f64);

impl Money {
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self(currency, amount)
    }

    pub fn currency(&self) -> Currency {
        self.0
    }

    pub fn amount(&self) -> f64 {
        self.1
    }
}

impl FromStr for Money {
    type Err = anyhow::Error;

    /// Errors on any currency marker other than USD's, rather than guessing an exchange rate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Currency::USD;
        for marker in s
            .split(|c: char| c.is_whitespace() || c.is_numeric() || ",.-".contains(c))
            .filter(|m| !m.is_empty())
        {
            cur = Currency::from_abbreviation(marker)
                .ok_or_else(|| anyhow!("unsupported currency {:?} in {:?}, expected USD", marker, s))?;
        }
        let price = s
            .split(char::is_whitespace)
            .find_map(|s| (!s.is_empty()).then(|| parse_dollars(s)).flatten())
            .ok_or_else(|| anyhow!("failed to find an amount in {:?}", s))?;
        Ok(Self(cur, price))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.1, self.0)
    }
}

/// Ignore commas when parsing number formats.
/// e.g. 13,096,340.3 -> 13096340.3
pub struct IgnoreComma<T>
where
    T: FromStr,
{
    _t: PhantomData<T>,
}

impl<'de, T> DeserializeAs<'de, T> for IgnoreComma<T>
where
    T: FromStr,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Helper<TT>
        where
            TT: FromStr,
        {
            _tt: PhantomData<TT>,
        }

        impl<'de, TT> Visitor<'de> for Helper<TT>
        where
            TT: FromStr,
        {
            type Value = TT;

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                TT::from_str(v.replace(',', "").trim())
                    .map_err(|_| E::custom(format!("could not parse {:?}, even ignoring commas", v)))
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_fmt(format_args!("a number, possibly with thousands separators"))
            }
        }

        deserializer.deserialize_str(Helper::<T> { _tt: PhantomData })
    }
}
