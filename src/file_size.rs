// 文件大小格式化
//
// 1024 进制单位；缩放值小于 10 时保留一位小数（整数不带 .0），否则取整；
// 单位在舍入后确定

const UNITS: [&str; 7] = ["bytes", "kB", "MB", "GB", "TB", "PB", "EB"];
const BASE: f64 = 1024.0;

/// 将字节数格式化为可读字符串
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BASE && unit < UNITS.len() - 1 {
        value /= BASE;
        unit += 1;
    }

    // 舍入后满 1024 时进位到下一单位（1048575 → 1 MB 而非 1024 kB）
    let mut scaled = round_scaled(value);
    if scaled >= BASE && unit < UNITS.len() - 1 {
        unit += 1;
        scaled = round_scaled(scaled / BASE);
    }

    format!("{} {}", format_scaled(scaled), UNITS[unit])
}

/// 小于 10 保留一位小数，否则取整
fn round_scaled(value: f64) -> f64 {
    if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

fn format_scaled(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{:.1}", value)
    }
}
