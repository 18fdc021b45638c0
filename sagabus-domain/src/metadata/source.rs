use super::MethodAnnotation;
use crate::error::{DomainError, DomainResult};
use dashmap::DashMap;

/// 元数据源：返回类型上每个方法的声明标签与参数列表
///
/// 对同一类型必须是确定性的；类型未知时返回 `DomainError::UnknownType`。
pub trait MetadataSource: Send + Sync {
    fn load_class_methods_annotation(&self, type_name: &str)
    -> DomainResult<Vec<MethodAnnotation>>;
}

/// 基于内存的元数据源
/// - 以类型名注册其方法标签，按注册顺序返回
#[derive(Default)]
pub struct InMemoryMetadataSource {
    types: DashMap<String, Vec<MethodAnnotation>>,
}

impl InMemoryMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册（或覆盖）类型的方法标签
    pub fn register(&self, type_name: impl Into<String>, methods: Vec<MethodAnnotation>) {
        self.types.insert(type_name.into(), methods);
    }

    /// 为已注册类型追加一个方法标签；类型不存在时一并注册
    pub fn push(&self, type_name: impl Into<String>, method: MethodAnnotation) {
        self.types.entry(type_name.into()).or_default().push(method);
    }
}

impl MetadataSource for InMemoryMetadataSource {
    fn load_class_methods_annotation(
        &self,
        type_name: &str,
    ) -> DomainResult<Vec<MethodAnnotation>> {
        self.types
            .get(type_name)
            .map(|m| m.value().clone())
            .ok_or_else(|| DomainError::unknown_type(type_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{DeclaredTag, ParameterDescriptor};

    #[test]
    fn unknown_type_is_an_error() {
        let source = InMemoryMetadataSource::new();
        let err = source.load_class_methods_annotation("Nope").unwrap_err();
        match err {
            DomainError::UnknownType { type_name } => assert_eq!(type_name, "Nope"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn push_preserves_declaration_order() {
        let source = InMemoryMetadataSource::new();
        for name in ["a", "b", "c"] {
            source.push(
                "Saga",
                MethodAnnotation::new(
                    name,
                    DeclaredTag::Other {
                        kind: "command_handler".into(),
                    },
                    vec![ParameterDescriptor::untyped("x")],
                ),
            );
        }

        let methods = source.load_class_methods_annotation("Saga").unwrap();
        let names: Vec<_> = methods.iter().map(|m| m.method.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
