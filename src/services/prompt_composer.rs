//! Prompt 构建 - 业务能力层
//!
//! 纯文本拼装，不做校验也不会失败

use crate::models::context::ProjectContext;
use crate::models::target::AnalysisTarget;

/// 人物 / 头像类图片地址模板
pub const AVATAR_URL_TEMPLATE: &str = "https://i.pravatar.cc/150?u={unique_id}";

/// 商品 / 通用物品类图片地址模板
pub const ITEM_URL_TEMPLATE: &str = "https://picsum.photos/seed/{seed}/600/400";

/// 构建发送给 LLM 的完整指令
///
/// # 参数
/// - `target`: 当前组件
/// - `context`: 整个批次共用的项目上下文
pub fn compose_prompt(target: &AnalysisTarget, context: &ProjectContext) -> String {
    let typed_rule = if target.is_typed {
        "4. 这是 TypeScript 文件：必须严格遵守文件中声明的 interface / type，\
         字段名、可选性和类型都不能偏离，不要生成声明之外的字段。"
    } else {
        "4. 这不是 TypeScript 文件：根据组件对 props 的使用方式推断字段和类型。"
    };

    format!(
        r#"你需要为下面的 UI 组件生成一组逼真的模拟 props 数据，用于在隔离环境中渲染该组件。

【项目上下文】
{context}

【目标组件】
  文件路径：{path}
  是否 TypeScript 文件：{is_typed}

【生成规则】
1. 根据项目上下文推断业务领域，生成符合该领域的真实数据，不要使用 "foo"、"test"、"lorem ipsum" 之类的占位文本。
2. 表示人物或头像的图片，使用 {avatar}，并为每个人物使用不同的 unique_id。
3. 表示商品或其他物品的图片，使用 {item}，并为每个物品使用不同的 seed。
{typed_rule}
5. 回调类 props（onClick、onChange 等）不要生成，只生成数据类 props。
6. 检查组件是否依赖外层包装：
   - 使用了 useNavigate / useParams / Link 等路由能力 → "router": true
   - 使用了 useSelector / useDispatch 等全局状态 → "redux": true
   - 使用了 useQuery / useMutation 等数据请求能力 → "reactQuery": true

【输出格式】
只返回一个 JSON 对象，且只包含两个顶层字段：
{{
  "props": {{ ... }},
  "wrappers": {{ "router": false, "redux": false, "reactQuery": false }}
}}
wrappers 的值只能是布尔值。不要返回任何其他内容。

【组件源码】
{content}
"#,
        context = context.as_str(),
        path = target.path,
        is_typed = target.is_typed,
        avatar = AVATAR_URL_TEMPLATE,
        item = ITEM_URL_TEMPLATE,
        typed_rule = typed_rule,
        content = target.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "interface Props { title: string }\nexport const Card = ({ title }: Props) => <h1>{title}</h1>;";

    #[test]
    fn test_prompt_embeds_target_and_context() {
        let target = AnalysisTarget::new("src/Card.tsx", SOURCE);
        let context = ProjectContext::new("Project Name: shop-ui");

        let prompt = compose_prompt(&target, &context);
        assert!(prompt.contains("Project Name: shop-ui"));
        assert!(prompt.contains("文件路径：src/Card.tsx"));
        assert!(prompt.contains("是否 TypeScript 文件：true"));
        assert!(prompt.contains("严格遵守文件中声明的 interface"));
        assert!(prompt.ends_with(&format!("{}\n", SOURCE)));
    }

    #[test]
    fn test_prompt_fixes_output_contract() {
        let target = AnalysisTarget::new("Button.jsx", "export default () => <button/>;");
        let prompt = compose_prompt(&target, &ProjectContext::new("x"));

        assert!(prompt.contains(r#""props": { ... }"#));
        assert!(prompt.contains(r#""wrappers""#));
        assert!(prompt.contains("https://i.pravatar.cc/150?u="));
        assert!(prompt.contains("https://picsum.photos/seed/"));
        assert!(prompt.contains("是否 TypeScript 文件：false"));
        assert!(!prompt.contains("严格遵守文件中声明的 interface"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let target = AnalysisTarget::new("List.tsx", SOURCE);
        let context = ProjectContext::new("ctx");
        assert_eq!(compose_prompt(&target, &context), compose_prompt(&target, &context));
    }
}
