//! # 候选编码
//!
//! 每个候选编码对完整字节序列做一次严格解码，结果为 [`Attempt`]：
//! 成功（附带替换字符 U+FFFD 的数量）或失败。
//!
//! ## 解码规则
//! - 非法字节序列一律视为失败，不做替换
//! - Windows 代码页中未定义的字节（WHATWG 表将其映射为 C1 控制字符
//!   U+0080..U+009F）同样视为失败
//! - `utf-8-sig` 去除开头的 BOM，`utf-8` 保留为 U+FEFF
//!
//! ## 依赖关系
//! - 被 `encoding/mod.rs` 使用
//! - 使用 `encoding_rs` 提供的 WHATWG 解码器

use encoding_rs::{
    Encoding, EUC_JP, GBK, ISO_2022_JP, SHIFT_JIS, UTF_8, WINDOWS_1251, WINDOWS_1252, WINDOWS_874,
};

/// 解码器替换非法字节时使用的字符
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// 单次解码尝试的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// 解码成功，`markers` 为文本中 U+FFFD 的数量
    Decoded { text: String, markers: usize },
    /// 字节序列在该编码下不合法
    Failed,
}

impl Attempt {
    fn from_text(text: String) -> Self {
        let markers = text.chars().filter(|&c| c == REPLACEMENT_CHAR).count();
        Attempt::Decoded { text, markers }
    }
}

#[derive(Debug, Clone, Copy)]
enum Decoder {
    /// WHATWG 解码器，严格模式
    Whatwg(&'static Encoding),
    /// Windows 代码页，额外拒绝厂商表中未定义的字节
    CodePage(&'static Encoding),
    /// UTF-8，去除 BOM
    Utf8Sig,
    Ascii,
    Latin1,
}

/// 候选编码
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    name: &'static str,
    decoder: Decoder,
}

impl Candidate {
    pub fn utf8() -> Self {
        Self::new("utf-8", Decoder::Whatwg(UTF_8))
    }

    pub fn utf8_sig() -> Self {
        Self::new("utf-8-sig", Decoder::Utf8Sig)
    }

    pub fn windows_1252() -> Self {
        Self::new("windows-1252", Decoder::CodePage(WINDOWS_1252))
    }

    pub fn windows_1251() -> Self {
        Self::new("windows-1251", Decoder::CodePage(WINDOWS_1251))
    }

    /// 泰文（同时覆盖 TIS-620）
    pub fn windows_874() -> Self {
        Self::new("windows-874", Decoder::CodePage(WINDOWS_874))
    }

    /// 简体中文（GB2312 的超集）
    pub fn gbk() -> Self {
        Self::new("gbk", Decoder::Whatwg(GBK))
    }

    pub fn shift_jis() -> Self {
        Self::new("shift_jis", Decoder::Whatwg(SHIFT_JIS))
    }

    pub fn euc_jp() -> Self {
        Self::new("euc-jp", Decoder::Whatwg(EUC_JP))
    }

    pub fn iso_2022_jp() -> Self {
        Self::new("iso-2022-jp", Decoder::Whatwg(ISO_2022_JP))
    }

    pub fn ascii() -> Self {
        Self::new("ascii", Decoder::Ascii)
    }

    pub fn latin1() -> Self {
        Self::new("latin1", Decoder::Latin1)
    }

    fn new(name: &'static str, decoder: Decoder) -> Self {
        Self { name, decoder }
    }

    /// 编码名称（用于结果描述）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 尝试解码完整字节序列
    pub fn attempt(&self, bytes: &[u8]) -> Attempt {
        let decoded = match self.decoder {
            Decoder::Whatwg(encoding) => strict(encoding, bytes),
            Decoder::CodePage(encoding) => {
                strict(encoding, bytes).filter(|text| !text.chars().any(is_c1_control))
            }
            Decoder::Utf8Sig => {
                let body = match Encoding::for_bom(bytes) {
                    Some((encoding, bom_len)) if encoding == UTF_8 => &bytes[bom_len..],
                    _ => bytes,
                };
                strict(UTF_8, body)
            }
            Decoder::Ascii => bytes
                .is_ascii()
                .then(|| String::from_utf8_lossy(bytes).into_owned()),
            Decoder::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        };

        decoded.map_or(Attempt::Failed, Attempt::from_text)
    }
}

/// 默认候选列表（顺序仅用于平局裁决）
///
/// cp1252、cp1251、tis-620、gb2312 与列表中已有的解码器相同，不重复列出。
/// Latin-1 接受任意字节，排在 windows-1252 之后会遮蔽其余全部候选，
/// 因此与 ascii 一起放在末尾作为兜底：既非 UTF-8 也非合法 cp1252 的输入
/// 会继续尝试 cp1251、泰文、中文和日文编码，而不是直接落到 `latin1`。
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::utf8(),
        Candidate::utf8_sig(),
        Candidate::windows_1252(),
        Candidate::windows_1251(),
        Candidate::windows_874(),
        Candidate::gbk(),
        Candidate::shift_jis(),
        Candidate::euc_jp(),
        Candidate::iso_2022_jp(),
        Candidate::ascii(),
        Candidate::latin1(),
    ]
}

fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn is_c1_control(c: char) -> bool {
    ('\u{80}'..='\u{9F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(attempt: Attempt) -> (String, usize) {
        match attempt {
            Attempt::Decoded { text, markers } => (text, markers),
            Attempt::Failed => panic!("expected a successful decode"),
        }
    }

    #[test]
    fn test_utf8_keeps_bom_and_sig_strips_it() {
        let bytes = b"\xEF\xBB\xBFabc";
        assert_eq!(decoded(Candidate::utf8().attempt(bytes)).0, "\u{FEFF}abc");
        assert_eq!(decoded(Candidate::utf8_sig().attempt(bytes)).0, "abc");
    }

    #[test]
    fn test_invalid_utf8_fails() {
        assert_eq!(Candidate::utf8().attempt(b"caf\xE9"), Attempt::Failed);
        assert_eq!(Candidate::utf8_sig().attempt(b"caf\xE9"), Attempt::Failed);
    }

    #[test]
    fn test_literal_replacement_chars_are_counted() {
        let (_, markers) = decoded(Candidate::utf8().attempt("a\u{FFFD}b\u{FFFD}".as_bytes()));
        assert_eq!(markers, 2);
    }

    #[test]
    fn test_windows_1252() {
        let (text, markers) = decoded(Candidate::windows_1252().attempt(b"caf\xE9 \x80"));
        assert_eq!(text, "café €");
        assert_eq!(markers, 0);
    }

    #[test]
    fn test_code_page_rejects_undefined_bytes() {
        // 0x81 在 cp1252 中未定义
        assert_eq!(Candidate::windows_1252().attempt(b"a\x81b"), Attempt::Failed);
        // 0x98 在 cp1251 中未定义
        assert_eq!(Candidate::windows_1251().attempt(b"\x98"), Attempt::Failed);
    }

    #[test]
    fn test_thai_code_page() {
        // "สวัสดี" in TIS-620 / cp874
        let bytes = [0xCA, 0xC7, 0xD1, 0xCA, 0xB4, 0xD5];
        assert_eq!(decoded(Candidate::windows_874().attempt(&bytes)).0, "สวัสดี");
    }

    #[test]
    fn test_shift_jis() {
        let bytes = [0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA];
        assert_eq!(decoded(Candidate::shift_jis().attempt(&bytes)).0, "日本語");
    }

    #[test]
    fn test_gbk() {
        // "中文" in GBK
        let bytes = [0xD6, 0xD0, 0xCE, 0xC4];
        assert_eq!(decoded(Candidate::gbk().attempt(&bytes)).0, "中文");
    }

    #[test]
    fn test_latin1_is_the_last_candidate() {
        let names: Vec<_> = default_candidates().iter().map(Candidate::name).collect();
        assert_eq!(names.last(), Some(&"latin1"));
        let position = |name: &str| names.iter().position(|n| *n == name);
        assert!(position("windows-1251") < position("latin1"));
    }

    #[test]
    fn test_ascii_and_latin1() {
        assert_eq!(Candidate::ascii().attempt(b"\xFF"), Attempt::Failed);
        assert_eq!(decoded(Candidate::ascii().attempt(b"plain")).0, "plain");
        assert_eq!(decoded(Candidate::latin1().attempt(b"\x81\xFF")).0, "\u{81}ÿ");
    }
}
