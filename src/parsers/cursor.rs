//! # 行游标
//!
//! 对输入流逐行前进，只读一次。每行去掉首尾空白后返回，
//! 字节按 UTF-8 宽松解码。
//!
//! ## 依赖关系
//! - 被 `parsers/sr_output.rs` 使用

use crate::error::{FormatError, Result, SroutError};
use std::io::BufRead;

/// 输入行游标
pub struct LineCursor<R> {
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R> LineCursor<R> {
    /// 最近读取的行号（从 1 开始，尚未读取时为 0）
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        LineCursor {
            reader,
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// 读取下一行；流结束时返回 `None`
    pub fn try_next(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(SroutError::StreamRead)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).trim().to_string()))
    }

    /// 读取下一行；流结束视为格式错误
    pub fn next_line(&mut self, what: &'static str) -> Result<String> {
        match self.try_next()? {
            Some(line) => Ok(line),
            None => Err(SroutError::format(
                self.line_no + 1,
                FormatError::UnexpectedEof(what),
            )),
        }
    }

    /// 跳过一行
    pub fn skip(&mut self, what: &'static str) -> Result<()> {
        self.next_line(what).map(|_| ())
    }

    /// 读取直到遇到与某个终止行完全相同的行
    ///
    /// 返回 (数据行及其行号, 终止行)。终止行出现前流结束视为格式错误。
    pub fn read_block(
        &mut self,
        terminators: &[&str],
        what: &'static str,
    ) -> Result<(Vec<(usize, String)>, String)> {
        let mut lines = Vec::new();
        loop {
            let line = self.next_line(what)?;
            if terminators.contains(&line.as_str()) {
                return Ok((lines, line));
            }
            lines.push((self.line_no, line));
        }
    }
}
