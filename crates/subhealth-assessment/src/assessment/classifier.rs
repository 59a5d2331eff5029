use serde::{Deserialize, Serialize};

/// Health-status bands ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Good,
    Mild,
    Moderate,
    Severe,
}

struct TierBand {
    tier: HealthTier,
    upper_bound: Option<u32>,
    label: &'static str,
    advice: [&'static str; 3],
}

// Fixed cut points on the raw total; they do not scale with the catalog size.
static TIER_BANDS: [TierBand; 4] = [
    TierBand {
        tier: HealthTier::Good,
        upper_bound: Some(30),
        label: "健康状态良好",
        advice: [
            "保持规律作息与均衡饮食",
            "每周 3-5 次中等强度运动",
            "维持积极社交与情绪管理",
        ],
    },
    TierBand {
        tier: HealthTier::Mild,
        upper_bound: Some(60),
        label: "轻度亚健康",
        advice: [
            "优化睡眠（固定上/下床时间）",
            "增加力量+有氧结合的运动",
            "减少精制糖/酒精与熬夜",
        ],
    },
    TierBand {
        tier: HealthTier::Moderate,
        upper_bound: Some(90),
        label: "中度亚健康",
        advice: [
            "建立 4 周调理计划（作息-饮食-运动-情绪）",
            "必要时补充营养并记录每日能量/情绪波动",
            "引入冥想/呼吸放松 10-15 分钟/天",
        ],
    },
    TierBand {
        tier: HealthTier::Severe,
        upper_bound: None,
        label: "重度亚健康",
        advice: [
            "尽快系统评估，必要时就医或咨询心理师",
            "制定个性化干预计划并每周复盘",
            "减少高压任务，优先恢复睡眠与基础体力",
        ],
    },
];

/// Shown alongside every classification.
pub const DISCLAIMER: &str =
    "本工具为健康自我管理参考，不替代临床诊断。如症状持续或影响功能，请寻求专业医生/心理咨询师帮助。";

impl HealthTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Good, Self::Mild, Self::Moderate, Self::Severe]
    }

    /// Maps a grand total onto `[0,30]`, `(30,60]`, `(60,90]` or `(90,∞)`.
    pub fn classify(total: u32) -> Self {
        TIER_BANDS
            .iter()
            .find(|band| band.upper_bound.map_or(true, |bound| total <= bound))
            .map(|band| band.tier)
            .unwrap_or(Self::Severe)
    }

    pub fn label(self) -> &'static str {
        self.band().label
    }

    pub fn advice(self) -> &'static [&'static str; 3] {
        &self.band().advice
    }

    /// Inclusive upper bound of the band, `None` for the open-ended top band.
    pub fn upper_bound(self) -> Option<u32> {
        self.band().upper_bound
    }

    fn band(self) -> &'static TierBand {
        match self {
            Self::Good => &TIER_BANDS[0],
            Self::Mild => &TIER_BANDS[1],
            Self::Moderate => &TIER_BANDS[2],
            Self::Severe => &TIER_BANDS[3],
        }
    }
}

/// Classification result in the shape a renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierView {
    pub tier: HealthTier,
    pub label: &'static str,
    pub advice: Vec<&'static str>,
}

impl From<HealthTier> for TierView {
    fn from(tier: HealthTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            advice: tier.advice().to_vec(),
        }
    }
}
