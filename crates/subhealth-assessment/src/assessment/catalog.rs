use super::domain::MAX_SCORE_PER_ITEM;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

struct CategoryTemplate {
    key: &'static str,
    title: &'static str,
    items: &'static [&'static str],
}

const STANDARD_CATEGORIES: &[CategoryTemplate] = &[
    CategoryTemplate {
        key: "psych",
        title: "一、心理与情绪状态",
        items: &[
            "容易焦虑、烦躁或情绪波动大",
            "经常感到无精打采、提不起兴趣",
            "注意力难以集中、记忆力减退",
            "睡眠质量差（难入睡、易醒、多梦）",
            "压力大时出现心慌/发抖等躯体反应",
            "对工作或生活缺乏热情",
            "时常感到孤独、无助或被忽视",
            "对未来没有信心或感到迷茫",
            "经常叹气或莫名发愁",
            "情绪变化影响食欲或睡眠",
        ],
    },
    CategoryTemplate {
        key: "body",
        title: "二、身体状况",
        items: &[
            "经常感到疲倦或乏力",
            "起床后仍觉得没休息好",
            "容易感冒/口腔溃疡/过敏",
            "头痛、头晕或眼睛干涩",
            "胃口不好、腹胀、便秘或腹泻",
            "肌肉酸痛、颈肩僵硬",
            "手脚冰冷或出汗异常",
            "心慌、胸闷或偶有血压不稳",
            "脱发、皮肤暗沉、易长痘",
            "体重忽增忽减、代谢紊乱",
        ],
    },
    CategoryTemplate {
        key: "life",
        title: "三、生活方式与行为习惯",
        items: &[
            "经常熬夜或睡眠不足",
            "久坐不动、运动量少",
            "饮食不规律/常外卖/重口味",
            "依赖咖啡因/甜食/酒精提神",
            "长时间使用手机或电脑",
            "缺乏户外活动和阳光",
            "社交减少、情绪封闭",
            "压力长期得不到释放",
            "缺乏兴趣爱好或放松方式",
            "无规律体检或忽视身体信号",
        ],
    },
];

const ORDINAL_NUMERALS: &[char] = &[
    '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', '百', '零',
];

/// A named group of questions. Item order is the question index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: String,
    pub title: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn max_score(&self) -> u32 {
        self.items.len() as u32 * u32::from(MAX_SCORE_PER_ITEM)
    }

    /// Title without its leading ordinal, e.g. `二、身体状况` becomes `身体状况`.
    pub fn short_title(&self) -> &str {
        strip_ordinal(&self.title)
    }
}

fn strip_ordinal(title: &str) -> &str {
    let rest = title.trim_start_matches(ORDINAL_NUMERALS);
    if rest.len() == title.len() {
        return title;
    }

    match rest.strip_prefix('、') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => title,
    }
}

/// Immutable, ordered set of questionnaire categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    categories: Vec<Category>,
}

impl QuestionCatalog {
    /// The built-in three-dimension sub-health questionnaire.
    pub fn standard() -> Self {
        let categories = STANDARD_CATEGORIES
            .iter()
            .map(|template| Category {
                key: template.key.to_string(),
                title: template.title.to_string(),
                items: template.items.iter().map(|item| item.to_string()).collect(),
            })
            .collect();

        Self { categories }
    }

    pub fn from_definition(definition: QuestionnaireDefinition) -> Result<Self, CatalogError> {
        if definition.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(definition.categories.len());
        for category in definition.categories {
            let key = category.key.trim().to_string();
            if key.is_empty() {
                return Err(CatalogError::BlankKey);
            }
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateKey(key));
            }
            if category.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle(key));
            }
            if category.items.is_empty() {
                return Err(CatalogError::NoItems(key));
            }
            if let Some(index) = category.items.iter().position(|item| item.trim().is_empty()) {
                return Err(CatalogError::BlankItem { key, index });
            }

            categories.push(Category {
                key,
                title: category.title,
                items: category.items,
            });
        }

        Ok(Self { categories })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let definition: QuestionnaireDefinition = serde_json::from_reader(reader)?;
        Self::from_definition(definition)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn question(&self, key: &str, index: usize) -> Option<&str> {
        self.category(key)
            .and_then(|category| category.items.get(index))
            .map(String::as_str)
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(Category::item_count).sum()
    }

    pub fn max_score(&self) -> u32 {
        self.categories.iter().map(Category::max_score).sum()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Declarative questionnaire layout, as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireDefinition {
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub key: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("questionnaire must declare at least one category")]
    Empty,
    #[error("category key must not be blank")]
    BlankKey,
    #[error("category key '{0}' is declared more than once")]
    DuplicateKey(String),
    #[error("category '{0}' has a blank title")]
    BlankTitle(String),
    #[error("category '{0}' declares no questions")]
    NoItems(String),
    #[error("category '{key}' has a blank question at index {index}")]
    BlankItem { key: String, index: usize },
    #[error("failed to read questionnaire definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questionnaire definition: {0}")]
    Json(#[from] serde_json::Error),
}
