//! saga 事件监听器读取器（SagaEventListenersReader）
//!
//! 对每条声明独立执行以下校验，任一失败即剔除该声明：
//! 1. 标签种类必须是 saga 事件监听器；
//! 2. `identity_field` 非空；
//! 3. `identity_type` 非空且为已知类型；
//! 4. 方法第一个参数存在且具备 Event 能力。
//!
//! 非监听器种类的声明可以合法地出现在同一 saga 上，直接跳过且不记录日志；
//! 其余失败以 error 级别逐条记录（包含 saga 类型名与违规规则）。
//! 元数据源自身的错误（如 saga 类型未知）不在此捕获，直接向调用方传播。
//!
use super::binding::{AcceptedBinding, BindingDeclaration};
use crate::error::{BindingError, DomainResult};
use crate::logging::Logger;
use crate::metadata::{DeclaredTag, MetadataSource, SagaListenerTag, TypeCatalog};
use bon::Builder;
use std::sync::Arc;

/// 一次提取的完整结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// 通过校验的绑定（保持元数据源返回的顺序）
    pub accepted: Vec<AcceptedBinding>,
    /// 校验失败并已记录日志的声明
    pub rejected: Vec<BindingError>,
    /// 非监听器种类、被静默跳过的声明数
    pub skipped: usize,
}

impl ExtractionReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// saga 事件监听器读取器
///
/// 只读、无内部状态，可在多线程中对同一或不同 saga 类型并发调用。
#[derive(Builder, Clone)]
pub struct SagaEventListenersReader {
    metadata: Arc<dyn MetadataSource>,
    catalog: Arc<dyn TypeCatalog>,
    logger: Arc<dyn Logger>,
}

impl SagaEventListenersReader {
    /// 提取 saga 类型上通过校验的事件绑定
    pub fn extract_event_bindings(&self, saga_type: &str) -> DomainResult<Vec<AcceptedBinding>> {
        Ok(self.extract_with_report(saga_type)?.accepted)
    }

    /// 同 `extract_event_bindings`，并附带被剔除/跳过的统计
    pub fn extract_with_report(&self, saga_type: &str) -> DomainResult<ExtractionReport> {
        let annotations = self.metadata.load_class_methods_annotation(saga_type)?;
        let mut report = ExtractionReport::default();

        for annotation in annotations {
            let declaration = BindingDeclaration::from_annotation(saga_type, annotation);

            match self.validate(declaration) {
                Ok(binding) => report.accepted.push(binding),
                Err(BindingError::UnsupportedBindingKind { .. }) => report.skipped += 1,
                Err(err) => {
                    self.logger.error(&err.diagnostic());
                    report.rejected.push(err);
                }
            }
        }

        Ok(report)
    }

    fn validate(&self, declaration: BindingDeclaration) -> Result<AcceptedBinding, BindingError> {
        let tag = Self::guard_binding_kind(&declaration)?;
        Self::guard_identity_field(&declaration, &tag)?;
        self.guard_identity_type(&declaration, &tag)?;
        let event_type = self.guard_first_argument_is_event(&declaration)?;

        let SagaListenerTag {
            identity_field,
            identity_type,
        } = tag;

        Ok(AcceptedBinding::new(
            declaration,
            event_type,
            identity_field,
            identity_type,
        ))
    }

    fn guard_binding_kind(declaration: &BindingDeclaration) -> Result<SagaListenerTag, BindingError> {
        match &declaration.tag {
            DeclaredTag::SagaListener(tag) => Ok(tag.clone()),
            other => Err(BindingError::UnsupportedBindingKind {
                saga: declaration.saga_type.clone(),
                kind: other.kind().to_string(),
            }),
        }
    }

    fn guard_identity_field(
        declaration: &BindingDeclaration,
        tag: &SagaListenerTag,
    ) -> Result<(), BindingError> {
        if tag.identity_field.is_empty() {
            return Err(BindingError::MissingIdentityField {
                saga: declaration.saga_type.clone(),
                method: declaration.method.clone(),
            });
        }

        Ok(())
    }

    fn guard_identity_type(
        &self,
        declaration: &BindingDeclaration,
        tag: &SagaListenerTag,
    ) -> Result<(), BindingError> {
        if tag.identity_type.is_empty() || !self.catalog.type_exists(&tag.identity_type) {
            return Err(BindingError::MissingOrUnresolvableIdentityType {
                saga: declaration.saga_type.clone(),
                method: declaration.method.clone(),
                identity_type: tag.identity_type.clone(),
            });
        }

        Ok(())
    }

    fn guard_first_argument_is_event(
        &self,
        declaration: &BindingDeclaration,
    ) -> Result<String, BindingError> {
        declaration
            .parameters
            .first()
            .and_then(|p| p.type_name.as_deref())
            .filter(|t| self.catalog.implements_event(t))
            .map(str::to_string)
            .ok_or_else(|| BindingError::InvalidHandlerSignature {
                saga: declaration.saga_type.clone(),
                method: declaration.method.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::logging::{LogLevel, MemoryLogger};
    use crate::metadata::{
        InMemoryMetadataSource, InMemoryTypeCatalog, MethodAnnotation, ParameterDescriptor,
    };

    const SAGA: &str = "shop::OrderSaga";

    fn listener(field: &str, identity: &str) -> DeclaredTag {
        DeclaredTag::SagaListener(
            SagaListenerTag::builder()
                .identity_field(field)
                .identity_type(identity)
                .build(),
        )
    }

    fn event_param() -> Vec<ParameterDescriptor> {
        vec![
            ParameterDescriptor::typed("event", "shop::OrderPlaced"),
            ParameterDescriptor::typed("ctx", "bus::Context"),
        ]
    }

    fn fixture(methods: Vec<MethodAnnotation>) -> (SagaEventListenersReader, MemoryLogger) {
        let source = InMemoryMetadataSource::new();
        source.register(SAGA, methods);

        let catalog = InMemoryTypeCatalog::new();
        catalog
            .register_type("shop::OrderId")
            .register_type("shop::PlaceOrder")
            .register_event_name("shop::OrderPlaced");

        let logger = MemoryLogger::new();
        let reader = SagaEventListenersReader::builder()
            .metadata(Arc::new(source))
            .catalog(Arc::new(catalog))
            .logger(Arc::new(logger.clone()))
            .build();

        (reader, logger)
    }

    #[test]
    fn valid_binding_is_accepted() {
        let (reader, logger) = fixture(vec![MethodAnnotation::new(
            "on_order_placed",
            listener("order_id", "shop::OrderId"),
            event_param(),
        )]);

        let bindings = reader.extract_event_bindings(SAGA).unwrap();
        assert_eq!(bindings.len(), 1);

        let b = &bindings[0];
        assert_eq!(b.saga_type(), SAGA);
        assert_eq!(b.method(), "on_order_placed");
        assert_eq!(b.event_type(), "shop::OrderPlaced");
        assert_eq!(b.identity_field(), "order_id");
        assert_eq!(b.identity_type(), "shop::OrderId");
        assert_eq!(b.parameters().len(), 2);
        assert!(logger.is_empty());
    }

    #[test]
    fn non_listener_declarations_are_skipped_silently() {
        let (reader, logger) = fixture(vec![
            MethodAnnotation::new(
                "place",
                DeclaredTag::Other {
                    kind: "command_handler".into(),
                },
                vec![ParameterDescriptor::typed("cmd", "shop::PlaceOrder")],
            ),
            MethodAnnotation::new(
                "noop",
                DeclaredTag::Other {
                    kind: "query_handler".into(),
                },
                vec![],
            ),
        ]);

        let report = reader.extract_with_report(SAGA).unwrap();
        assert!(report.accepted.is_empty());
        assert_eq!(report.skipped, 2);
        assert_eq!(report.rejected_count(), 0);
        assert!(logger.is_empty());
    }

    #[test]
    fn empty_identity_field_is_rejected() {
        let (reader, logger) = fixture(vec![MethodAnnotation::new(
            "on_order_placed",
            listener("", "shop::OrderId"),
            event_param(),
        )]);

        assert!(reader.extract_event_bindings(SAGA).unwrap().is_empty());

        let errors = logger.lines_at(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("identity_field"));
        assert!(errors[0].message.contains(SAGA));
    }

    #[test]
    fn missing_or_unknown_identity_type_is_rejected() {
        let (reader, logger) = fixture(vec![
            MethodAnnotation::new("a", listener("order_id", ""), event_param()),
            MethodAnnotation::new("b", listener("order_id", "shop::Ghost"), event_param()),
        ]);

        let report = reader.extract_with_report(SAGA).unwrap();
        assert!(report.accepted.is_empty());
        assert_eq!(report.rejected_count(), 2);

        let errors = logger.lines_at(LogLevel::Error);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|l| l.message.contains("identity_type")));
        assert!(errors[1].message.contains("shop::Ghost"));
    }

    #[test]
    fn handler_without_event_first_argument_is_rejected() {
        let (reader, logger) = fixture(vec![
            MethodAnnotation::new("no_args", listener("order_id", "shop::OrderId"), vec![]),
            MethodAnnotation::new(
                "scalar_arg",
                listener("order_id", "shop::OrderId"),
                vec![ParameterDescriptor::untyped("raw")],
            ),
            MethodAnnotation::new(
                "command_arg",
                listener("order_id", "shop::OrderId"),
                vec![ParameterDescriptor::typed("cmd", "shop::PlaceOrder")],
            ),
        ]);

        let report = reader.extract_with_report(SAGA).unwrap();
        assert!(report.accepted.is_empty());
        assert!(
            report
                .rejected
                .iter()
                .all(|e| matches!(e, BindingError::InvalidHandlerSignature { .. }))
        );

        let errors = logger.lines_at(LogLevel::Error);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|l| l.message.contains("handler signature")));
    }

    #[test]
    fn rules_are_checked_in_order() {
        // 同时缺少 identity_field 与合法参数时，只报告第一条违规
        let (reader, logger) = fixture(vec![MethodAnnotation::new(
            "broken",
            listener("", ""),
            vec![],
        )]);

        let report = reader.extract_with_report(SAGA).unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].code(), "missing_identity_field");
        assert_eq!(logger.lines().len(), 1);
    }

    #[test]
    fn unknown_saga_type_propagates() {
        let (reader, logger) = fixture(vec![]);

        let err = reader.extract_event_bindings("shop::Nope").unwrap_err();
        assert!(matches!(err, DomainError::UnknownType { .. }));
        assert!(logger.is_empty());
    }
}
