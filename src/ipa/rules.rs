//! IPA 符号表
//!
//! 每个码位（NFD 分解之后）只对应一个动作类别：附着、替换、整串淘汰、删除、截断、普通。
//! 下面按语音特征分组的常量只用来说明某个码位为什么被删除/附着/淘汰，
//! 运行时只查询 [`SymbolTables::classify`]。

use std::collections::{HashMap, HashSet};

// ============================================================================
// 按语音特征分组（仅作说明）
// ============================================================================

/// 发声类型：送气、气声、不除阻
pub const PHONATION: &[char] = &['\u{02B0}', '\u{02B1}', '\u{031A}'];

/// 次要调音：唇化、腭化、软腭化、咽化
pub const SECONDARY_ARTICULATION: &[char] = &['\u{02B7}', '\u{02B2}', '\u{02E0}', '\u{02C1}'];

/// 鼻化
pub const NASALIZATION: &[char] = &['\u{0303}'];

/// 音长：超短、长、半长
pub const LENGTH: &[char] = &['\u{0306}', '\u{02D0}', '\u{02D1}'];

/// 元音圆唇度
pub const VOWEL_OTHER: &[char] = &['\u{031C}', '\u{0339}', '\u{1D5D}'];

/// 成节性：成节、不成节
pub const SYLLABICITY: &[char] = &['\u{030D}', '\u{032F}'];

/// 相对调音位置：升、降、前、后、央化、中央化
pub const RELATIVE_ARTICULATION: &[char] = &[
    '\u{031D}', '\u{031E}', '\u{031F}', '\u{0320}', '\u{0324}', '\u{033D}',
];

/// 成节符（下竖线）
pub const SYLLABIC: &[char] = &['\u{0329}'];

/// 钩
pub const OTHER: &[char] = &['\u{0322}'];

/// 舌叶
pub const LAMINAL: &[char] = &['\u{033B}'];

/// 声调、重音、音节点等，不参与任何分组的删除符号
pub const PROSODY_AND_MISC: &[char] = &[
    // 重音
    '\'', '\u{02C8}', '\u{02CC}',
    '°', '*', '^', '\u{00B7}', '\u{0131}',
    // 音节分隔
    '.',
    // 声调数字
    '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2078}',
    // 五度调值
    '\u{02E5}', '\u{02E6}', '\u{02E7}', '\u{02E8}', '\u{02E9}',
    '\u{02E2}', '\u{02E3}', '\u{02E1}',
    // 声调附加符
    '\u{0302}', '\u{0304}', '\u{030B}', '\u{030C}', '\u{030F}', '\u{02C7}',
    '\u{2193}', '\u{2197}', '\u{2198}', '\u{A71C}',
    // 曲折调
    '\u{1DC4}', '\u{1DC5}', '\u{1DC6}', '\u{1DC7}', '\u{1DC8}',
    // 锐音、钝音
    '\u{0301}', '\u{0300}',
    // 舌根前伸/后缩
    '\u{0318}', '\u{0319}',
    '\u{0323}',
    // 上标前鼻化、前浊化等
    '\u{1D47}', '\u{1D48}', '\u{1D4A}', '\u{1D50}', '\u{1D51}', '\u{1DA2}',
    // 鼻除阻
    '\u{207F}',
    // 塞擦连音符：语料中大量塞擦音未标连音符，统一去掉
    '\u{0361}',
    '\u{0330}', '\u{0348}', '\u{034D}',
    // r 音色
    '\u{02B3}', '\u{02DE}',
    '\u{25CC}',
    // 挤喉
    '\u{02BC}',
    '\u{2205}', '\u{207B}', '\u{2053}', '\u{1DA3}', '\u{02ED}', '\u{02E4}', '\u{0347}',
];

// ============================================================================
// 动作类别
// ============================================================================

/// 附着到前一个 token 的附加符（次要调音见 [`SECONDARY_ARTICULATION`]）
pub const ATTACH: &[char] = &[
    // 清化
    VOICELESS_MARK,
    // 软音符
    '\u{0327}',
    // 齿音
    '\u{032A}',
];

/// 清化附加符（下圆圈）
pub const VOICELESS_MARK: char = '\u{0325}';

/// 出现即淘汰整条转写
pub const ELIMINATE: &[char] = &[
    '_', '\u{0199}',
    // 龈腭鼻音等非标准符号
    '\u{019E}', '\u{0235}', '\u{0236}', '\u{01B6}',
    // 浊化（语料里极少出现）
    '\u{032C}',
    // 前缀/后缀标记
    '-',
];

/// 截断符：从第一次出现处起全部丢弃
pub const TRUNCATE_MARKERS: &[char] = &[',', '~'];

/// 可以接受清化附加符的首字符（响音、近音）
pub const VOICEABLE_BASES: &[char] = &[
    'l', 'm', 'n', 'r', 'w', '\u{0272}', '\u{0279}', '\u{027D}', '\u{027E}', '\u{028B}',
];

/// 单字符替换表，替换结果可以是多个字符
pub const REPLACEMENTS: &[(char, &str)] = &[
    // 搭嘴音
    ('!', "\u{01C3}"),
    ('\u{0287}', "\u{01C0}"),
    ('\u{0296}', "\u{01C1}"),
    ('\u{0297}', "\u{01C3}"),
    // 长音
    (':', "\u{02D0}"),
    // 清化
    ('\u{030A}', "\u{0325}"),
    // 央化
    ('\u{0308}', "\u{0324}"),
    // 齿音
    ('\u{033A}', "\u{032A}"),
    // 塞擦连音符
    ('\u{203F}', "\u{0361}"),
    ('\u{035C}', "\u{0361}"),
    ('g', "\u{0261}"),
    // r 音色
    ('\u{02B4}', "\u{02DE}"),
    // 喉塞音
    ('\u{02C0}', "\u{0294}"),
    ('\u{1D91}', "\u{0257}"),
    ('\u{02D4}', "\u{031D}"),
    // 卷舌元音
    ('\u{025A}', "\u{0259}\u{0279}"),
    ('\u{025D}', "\u{0259}\u{0279}"),
    // 连写塞擦音拆开
    ('\u{02A6}', "ts"),
    ('\u{02A3}', "dz"),
    ('\u{02A7}', "t\u{0283}"),
    ('\u{02A4}', "d\u{0292}"),
    ('\u{02A8}', "t\u{0255}"),
    ('\u{02A5}', "d\u{0290}"),
    ('\u{026E}', "l\u{0292}"),
    ('\u{019B}', "t\u{026C}"),
    ('\u{00A2}', "ts"),
];

/// 码位动作类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolAction {
    /// 附着到前一个 token
    Attach,
    /// 替换为给定字符串
    Replace(&'static str),
    /// 淘汰整条转写
    Eliminate,
    /// 删除该字符
    Delete,
    /// 截断：丢弃该字符及其后所有内容
    TruncateMarker,
    /// 普通字符（未登记的码位也归于此类）
    Plain,
}

lazy_static::lazy_static! {
    static ref GLOBAL_TABLES: SymbolTables = SymbolTables::new();
}

/// 符号分类表（构建后只读）
pub struct SymbolTables {
    actions: HashMap<char, SymbolAction>,
    voiceable_bases: HashSet<char>,
}

impl SymbolTables {
    /// 构建分类表
    ///
    /// 同一码位在多个分组中出现时，后写入的类别生效：
    /// 删除 < 附着 < 淘汰 < 截断 < 替换
    pub fn new() -> Self {
        let mut actions = HashMap::new();

        let delete_groups = [
            PROSODY_AND_MISC,
            PHONATION,
            NASALIZATION,
            LENGTH,
            VOWEL_OTHER,
            SYLLABICITY,
            RELATIVE_ARTICULATION,
            SYLLABIC,
            OTHER,
            LAMINAL,
        ];
        for group in delete_groups {
            for &ch in group {
                actions.insert(ch, SymbolAction::Delete);
            }
        }

        for &ch in ATTACH.iter().chain(SECONDARY_ARTICULATION) {
            actions.insert(ch, SymbolAction::Attach);
        }
        for &ch in ELIMINATE {
            actions.insert(ch, SymbolAction::Eliminate);
        }
        for &ch in TRUNCATE_MARKERS {
            actions.insert(ch, SymbolAction::TruncateMarker);
        }
        for &(ch, to) in REPLACEMENTS {
            actions.insert(ch, SymbolAction::Replace(to));
        }

        Self {
            actions,
            voiceable_bases: VOICEABLE_BASES.iter().copied().collect(),
        }
    }

    /// 进程共享的只读实例
    pub fn global() -> &'static SymbolTables {
        &GLOBAL_TABLES
    }

    /// 查询码位的动作类别
    pub fn classify(&self, ch: char) -> SymbolAction {
        self.actions.get(&ch).copied().unwrap_or(SymbolAction::Plain)
    }

    /// 替换结果（非替换类码位返回 None）
    pub fn replacement(&self, ch: char) -> Option<&'static str> {
        match self.classify(ch) {
            SymbolAction::Replace(to) => Some(to),
            _ => None,
        }
    }

    pub fn is_eliminate(&self, ch: char) -> bool {
        self.classify(ch) == SymbolAction::Eliminate
    }

    pub fn is_truncate_marker(&self, ch: char) -> bool {
        self.classify(ch) == SymbolAction::TruncateMarker
    }

    pub fn is_delete(&self, ch: char) -> bool {
        self.classify(ch) == SymbolAction::Delete
    }

    pub fn is_attach(&self, ch: char) -> bool {
        self.classify(ch) == SymbolAction::Attach
    }

    /// 判断 token 首字符能否接受清化附加符
    pub fn is_voiceable_base(&self, ch: char) -> bool {
        self.voiceable_bases.contains(&ch)
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}
