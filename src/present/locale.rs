use clap::ValueEnum;

use crate::types::Period;

/// Display language of the report.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Vi
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &ENGLISH,
            Locale::Vi => &VIETNAMESE
        }
    }
}

/// Every user-facing string of the report.
#[derive(Debug)]
pub struct Labels {
    pub page_title: &'static str,
    pub tab_overview: &'static str,
    pub tab_country: &'static str,
    pub tab_group: &'static str,
    pub tab_room: &'static str,
    pub tab_detail: &'static str,
    pub filter_top_n: &'static str,
    pub filter_countries: &'static str,
    pub filter_all: &'static str,
    pub month_prefix: &'static str,
    pub currency: &'static str,
    pub net: &'static str,
    pub transactions: &'static str,
    pub unique_guests: &'static str,
    pub change: &'static str,
    pub guest: &'static str,
    pub country: &'static str,
    pub room_type: &'static str,
    pub group: &'static str,
    pub description: &'static str,
    pub transaction_date: &'static str,
    pub legend_period: &'static str,
    pub undefined: &'static str,
    pub chart_daily: &'static str,
    pub chart_country: &'static str,
    pub chart_group: &'static str,
    pub chart_mix: &'static str,
    pub chart_pie: &'static str,
    pub chart_treemap: &'static str,
    pub chart_room: &'static str,
    pub chart_descriptions: &'static str,
    pub top_guests: &'static str,
    pub export_saved: &'static str
}

impl Labels {
    /// `Jan 2025` or `1/2025`.
    pub fn period(&self, period: Period) -> String {
        format!("{}{}", self.month_prefix, period.year())
    }

    /// `Jan 2025 vs Jan 2026`.
    pub fn comparison(&self) -> String {
        format!("{} vs {}", self.period(Period::Jan2025), self.period(Period::Jan2026))
    }

    pub fn net_column(&self, period: Period) -> String {
        format!("{} {}", self.net, self.period(period))
    }

    pub fn net_axis(&self) -> String {
        format!("{} ({})", self.net, self.currency)
    }
}

static ENGLISH: Labels = Labels {
    page_title: "Furama Resort Da Nang",
    tab_overview: "Overview",
    tab_country: "By country",
    tab_group: "By transaction group",
    tab_room: "By room type",
    tab_detail: "Detail",
    filter_top_n: "Top N (countries / rooms / descriptions)",
    filter_countries: "Countries",
    filter_all: "all",
    month_prefix: "Jan ",
    currency: "VND",
    net: "Net",
    transactions: "Transactions",
    unique_guests: "Guests (unique)",
    change: "Change %",
    guest: "Guest",
    country: "Country",
    room_type: "Room type",
    group: "Group",
    description: "Description",
    transaction_date: "Transaction Date",
    legend_period: "January",
    undefined: "N/A",
    chart_daily: "Daily net revenue",
    chart_country: "Net by country",
    chart_group: "Net by transaction group",
    chart_mix: "Revenue mix (excl. VAT, Service)",
    chart_pie: "Net mix by transaction group",
    chart_treemap: "Net revenue by year and category",
    chart_room: "Net by room type",
    chart_descriptions: "transaction descriptions by Net",
    top_guests: "Top guests by Net (First Name + Country)",
    export_saved: "Top guests table saved to"
};

static VIETNAMESE: Labels = Labels {
    page_title: "Furama Resort Đà Nẵng",
    tab_overview: "Tổng quan",
    tab_country: "Theo quốc gia",
    tab_group: "Theo nhóm giao dịch",
    tab_room: "Theo loại phòng",
    tab_detail: "Chi tiết",
    filter_top_n: "Top N (quốc gia / phòng / mô tả)",
    filter_countries: "Quốc gia",
    filter_all: "tất cả",
    month_prefix: "1/",
    currency: "VND",
    net: "Net",
    transactions: "Số giao dịch",
    unique_guests: "Khách (unique)",
    change: "Thay đổi %",
    guest: "Khách",
    country: "Quốc gia",
    room_type: "Loại phòng",
    group: "Nhóm",
    description: "Mô tả",
    transaction_date: "Ngày giao dịch",
    legend_period: "Tháng 1",
    undefined: "N/A",
    chart_daily: "Doanh thu net theo ngày",
    chart_country: "Net theo quốc gia",
    chart_group: "Net theo nhóm giao dịch",
    chart_mix: "Cơ cấu doanh thu (không gồm VAT, Service)",
    chart_pie: "Cơ cấu net theo nhóm giao dịch",
    chart_treemap: "Doanh thu net theo năm và nhóm",
    chart_room: "Net theo loại phòng",
    chart_descriptions: "mô tả giao dịch theo Net",
    top_guests: "Top khách theo Net (First Name + Country)",
    export_saved: "Đã lưu bảng top khách vào"
};
