//! 显示格式化模块
//!
//! - `status_label`: 后端状态码 -> 越南语标签
//! - `format_vnd`: 金额 -> vi-VN 货币字符串

pub const UNKNOWN_STATUS_LABEL: &str = "Không xác định";

/// 将后端状态映射为界面标签，未知状态返回 [`UNKNOWN_STATUS_LABEL`]
pub fn status_label(status: &str) -> &'static str {
    match status {
        "Active" => "Đang Sử Dụng",
        "Overdue" => "Quá Hạn",
        "Expired" => "Hết Hạn",
        "Available" => "Còn Trống",
        "Reserved" | "Booked" => "Đã Đặt",
        "Pending" => "Đang Chờ Duyệt",
        "Approved" => "Đã Duyệt",
        "Canceled" | "Cancelled" => "Đã Hủy",
        "Completed" => "Đã Hoàn Thành",
        _ => UNKNOWN_STATUS_LABEL,
    }
}

/// 按 vi-VN 货币格式输出金额
///
/// VND 没有小数位：四舍五入到整数，千位用 `.` 分隔，
/// 末尾为不换行空格加 `₫`。非有限值按 0 处理。
pub fn format_vnd(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    // -0.0 也按 0 输出
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push('\u{a0}');
    grouped.push('₫');
    grouped
}
