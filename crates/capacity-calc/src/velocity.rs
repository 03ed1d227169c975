//! 銷售速率與續航換算

use rust_decimal::Decimal;

/// 銷售速率計算器
pub struct VelocityCalculator;

impl VelocityCalculator {
    /// 日均銷量
    ///
    /// 視窗為 0 天時回傳 0（組態驗證另行把關），負銷量鉗制為 0。
    pub fn average_daily_sales(units_sold: Decimal, window_days: u32) -> Decimal {
        if window_days == 0 {
            return Decimal::ZERO;
        }
        let sold = if units_sold < Decimal::ZERO {
            Decimal::ZERO
        } else {
            units_sold
        };
        sold / Decimal::from(window_days)
    }

    /// 預估續航天數（目前庫存按日均銷量可支撐的天數）
    ///
    /// 零銷量以上限哨兵值表示，不做除以零；超長續航同樣鉗制在上限。
    pub fn runway_days(units_on_hand: Decimal, average_daily_sales: Decimal, cap_days: Decimal) -> Decimal {
        if average_daily_sales <= Decimal::ZERO {
            return cap_days;
        }
        let on_hand = if units_on_hand < Decimal::ZERO {
            Decimal::ZERO
        } else {
            units_on_hand
        };
        (on_hand / average_daily_sales).min(cap_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_daily_sales() {
        // 90 天售出 45 單位 → 日均 0.5
        let avg = VelocityCalculator::average_daily_sales(Decimal::from(45), 90);
        assert_eq!(avg, Decimal::new(5, 1));
    }

    #[test]
    fn test_zero_window_yields_zero() {
        assert_eq!(
            VelocityCalculator::average_daily_sales(Decimal::from(45), 0),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_runway_days() {
        // 在庫 15 / 日均 0.5 = 30 天
        let runway =
            VelocityCalculator::runway_days(Decimal::from(15), Decimal::new(5, 1), Decimal::from(9999));
        assert_eq!(runway, Decimal::from(30));
    }

    #[test]
    fn test_zero_velocity_hits_cap_sentinel() {
        let cap = Decimal::from(9999);
        let runway = VelocityCalculator::runway_days(Decimal::from(100), Decimal::ZERO, cap);
        assert_eq!(runway, cap);
    }

    #[test]
    fn test_long_runway_clamped_to_cap() {
        let cap = Decimal::from(365);
        // 在庫 10000 / 日均 1 = 10000 天 → 鉗制為 365
        let runway = VelocityCalculator::runway_days(Decimal::from(10_000), Decimal::ONE, cap);
        assert_eq!(runway, cap);
    }

    #[test]
    fn test_negative_on_hand_clamped() {
        let runway =
            VelocityCalculator::runway_days(Decimal::from(-5), Decimal::ONE, Decimal::from(9999));
        assert_eq!(runway, Decimal::ZERO);
    }
}
