// ==========================================
// 学位规划系统 - 表格文件解析器
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 行记录 HashMap<列名, 值>（已去除首尾空白，跳过全空行）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

/// 表头 + 数据行 → 行记录
fn collect_rows<I, R>(headers: &[String], rows: I) -> Vec<RawRow>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut records = Vec::new();
    for row in rows {
        let row_map: RawRow = headers
            .iter()
            .cloned()
            .zip(row.into_iter().map(|v| v.trim().to_string()))
            .filter(|(header, _)| !header.is_empty())
            .collect();

        // 跳过完全空白的行
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }
        records.push(row_map);
    }
    records
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;
        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        Ok(collect_rows(&headers, rows))
    }
}

// ==========================================
// Excel Parser（读取第一个工作表）
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;
        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let data_rows = rows.map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
        Ok(collect_rows(&headers, data_rows))
    }
}

// ==========================================
// 通用表格解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn is_tabular(path: &Path) -> bool {
        matches!(extension_of(path).as_str(), "csv" | "xlsx" | "xls")
    }

    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_skips_blank_rows() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "code,title,credits").unwrap();
        writeln!(temp_file, "CS 101, Intro ,4").unwrap();
        writeln!(temp_file, ",,").unwrap();
        writeln!(temp_file, "MA 111,Calculus").unwrap();

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("title").map(String::as_str), Some("Intro"));
        assert!(records[1].get("credits").is_none());
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        let parser = UniversalFileParser;
        assert!(matches!(
            parser.parse("catalog.txt"),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            parser.parse("/nonexistent/catalog.csv"),
            Err(ImportError::FileNotFound(_))
        ));
    }
}
