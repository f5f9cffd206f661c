//! Prompt templates.
//!
//! A prompt is assembled from three parts:
//!
//! 1. the action's base prompt (a settings override, or the built-in default)
//! 2. [`STRICT_OUTPUT`], which asks the model to return only the processed text
//! 3. an action-specific lead-in followed by the text itself
//!
//! [`AiAction::Custom`] has no base prompt: the user's instruction takes its place.

use crate::action::AiAction;
use crate::settings::AppSettings;

/// Output constraint appended to every prompt.
pub const STRICT_OUTPUT: &str = "
重要约束：
1. 仅返回处理后的正文结果。
2. 严禁包含任何“好的”、“以下是...”、“希望能帮到你”等开场白、结束语或解释性文字。
3. 直接输出内容，不要使用 Markdown 代码块包裹（除非内容本身是代码）。";

/// Lead-in used by [`AiAction::Custom`] when the user gave no instruction.
pub const DEFAULT_CUSTOM_INSTRUCTION: &str = "请处理以下文本";

const TRANSLATE: &str = r#"你是一个中英文翻译专家，将用户输入的中文翻译成英文，或将用户输入的英文翻译成中文。对于非中文内容，它将提供中文翻译结果。用户可以向助手发送需要翻译的内容，助手会回答相应的翻译结果，并确保符合中文语言习惯，你可以调整语气和风格，并考虑到某些词语的文化内涵和地区差异。同时作为翻译家，需将原文翻译成具有信达雅标准的译文。"信" 即忠实于原文的内容与意图；"达" 意味着译文应通顺易懂，表达清晰；"雅" 则追求译文的文化审美和语言的优美。目标是创作出既忠于原作精神，又符合目标语言文化和读者审美的翻译。"#;

const SUMMARIZE: &str = "# 角色
你是一位专业的文章总结助手，擅长快速提取文章核心信息并以清晰简洁的方式呈现。你能够处理各类中文文本，包括新闻、报告、论文等，并确保总结内容准确、客观、完整。

## 技能
### 技能1：提取关键信息
- 识别文章的主题、主要论点和结论。
- 提取关键数据、事实和重要细节。
- 保留原文的逻辑结构和核心信息。

### 技能2：生成简洁总结
- 将文章内容压缩为简洁的摘要，长度控制在原文的20%-30%。
- 使用流畅自然的简体中文表达。
- 避免添加个人观点或外部信息，忠实于原文。

### 技能3：适应不同文本类型
- 针对新闻类文本，突出事件、时间、地点、人物和结果。
- 针对学术或报告类文本，强调研究方法、数据发现和结论。
- 针对叙述性或文学类文本，概括主要情节、人物关系和主题。

## 约束：
- 只处理用户提供的文本内容，不自行搜索或引用外部来源。
- 确保总结的客观性和准确性，不扭曲原文意图。
- 如果原文较长或结构复杂，可分点或分段总结以提高可读性。
- 输出时使用简洁清晰的简体中文，避免冗长或模糊表述。";

const EXPAND: &str = "扩写要求：
务必基于已有的故事情节进行细致的扩写与润色，本次扩写内容务必不少于三百字。
行文需力求精炼，避免冗余水分，请全部使用中文标点符号。
务必严格遵守之前小说已设定的内容框架，在框架内进行合理的剧情延伸和发展，切忌脱离既定框架进行自由发挥。
描写务求自然生动，避免单一枯燥的叙述方式。
在对话描写方面，追求自然流畅，尽量减少不必要的修饰词语，例如“知道”、“一丝”、“他坚定的眼神”、“深吸一口气”、“缓缓地说”等等。严禁使用任何比喻修辞手法，避免在每句话后都添加语气修饰，使对话显得刻板僵硬。
在情感描写上，避免过于直白和肤浅的表达，务必追求细腻而婉转的情感流露，通过细微的描写来展现人物内心的情感波动。
务必密切关注读者的情绪变化，适时增加能够引发读者愉悦感和满足感的“爽点”，并恰当融入幽默搞笑的元素，使整体内容更加生动有趣，避免枯燥乏味。
着力加强人物的代入感，通过细致的描写，使读者能够更深入地体验人物的情绪波动，与人物产生更强烈的共鸣。";

const REDUCE_AI_FLAVOR: &str = "# 角色
你是一位专业的文本润色专家，擅长识别并消除文章中的AI生成痕迹，使其更贴近自然的人类写作风格。你精通中文表达习惯，能够巧妙调整句式、词汇和逻辑流畅度，让文本呈现地道的人文气息。

## 技能
### 技能1：识别AI生成特征
- 分析文本中常见的AI生成模式，如过度使用模板化结构、重复性表达、不自然的衔接词或缺乏情感层次的描述。
- 对比人类写作的常见特点，如多样的句式变化、合理的逻辑推进、自然的情感流露和文化语境适配。

### 技能2：优化文本自然度
- 调整词汇选择，替换生硬或机械化的词语，采用更口语化或语境适配的中文表达。
- 重组句子结构，避免过长或过短的极端句式，增加句式多样性以增强阅读流畅性。
- 增强逻辑连贯性，确保段落间过渡自然，避免突兀的转折或信息堆砌。

### 技能3：注入人文元素
- 根据文本类型（如叙述、说明、议论等）适当融入情感色彩、文化典故或生活化比喻，提升文本的亲和力和可信度。
- 确保优化后的文本符合简体中文的语法规范、用语习惯和社会文化背景。

## 约束条件
- 仅处理用户提供的文本内容，不添加额外信息或偏离原意的修改。
- 保持原文的核心信息和主旨不变，仅优化表达方式。
- 输出时直接返回润色后的文本，无需额外解释修改过程。
- 所有优化必须基于简体中文语境，符合中文读者阅读习惯。";

const FIX_GRAMMAR: &str = "请修正以下文本的语法和拼写错误，并保持原有的 Markdown 格式不变。";

/// Built-in base prompt for `action`. [`AiAction::Custom`] has none.
pub fn default_prompt(action: AiAction) -> Option<&'static str> {
    match action {
        AiAction::Summarize => Some(SUMMARIZE),
        AiAction::FixGrammar => Some(FIX_GRAMMAR),
        AiAction::Expand => Some(EXPAND),
        AiAction::ReduceAiFlavor => Some(REDUCE_AI_FLAVOR),
        AiAction::Translate => Some(TRANSLATE),
        AiAction::Custom => None,
    }
}

fn lead_in(action: AiAction) -> &'static str {
    match action {
        AiAction::Summarize => "请总结以下文本：",
        AiAction::FixGrammar => "待修正文本：",
        AiAction::Expand => "待扩写原文：",
        AiAction::ReduceAiFlavor => "待修改文本：",
        AiAction::Translate => "待翻译内容：",
        AiAction::Custom => "内容：",
    }
}

/// Base prompt for `action` under `settings`: a non-empty override wins over the default.
pub fn base_prompt(action: AiAction, settings: &AppSettings) -> &str {
    settings
        .prompt_override(action)
        .or_else(|| default_prompt(action))
        .unwrap_or_default()
}

/// Assemble the full prompt sent to the model.
///
/// `instruction` is only used by [`AiAction::Custom`]; an empty or missing instruction falls
/// back to [`DEFAULT_CUSTOM_INSTRUCTION`].
pub fn build_prompt(
    action: AiAction,
    text: &str,
    settings: &AppSettings,
    instruction: Option<&str>,
) -> String {
    match action {
        AiAction::Custom => {
            let instruction = instruction
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_CUSTOM_INSTRUCTION);
            format!(
                "{instruction}。\n\n{STRICT_OUTPUT}\n\n{}\n\n{text}",
                lead_in(action)
            )
        }
        _ => format!(
            "{}\n\n{STRICT_OUTPUT}\n\n{}\n\n{text}",
            base_prompt(action, settings),
            lead_in(action)
        ),
    }
}
