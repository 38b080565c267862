mod aggregate;
mod kpi;
#[cfg(test)]
mod tests;
mod views;

pub use aggregate::{Comparison, PeriodPair};
pub use kpi::{kpis, Kpis};
pub use views::{
    country_table, daily_net, group_mix, net_by_country, net_by_group, net_by_room_type, revenue_mix,
    room_table, top_descriptions, top_guests, DailyNet, GroupShare, GuestRanking
};
