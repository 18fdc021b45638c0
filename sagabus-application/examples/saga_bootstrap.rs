use async_trait::async_trait;
use sagabus_application::error::AppError;
use sagabus_application::handler::MessageHandler;
use sagabus_application::{ExecutionContext, ExecutionPolicyConfig, KernelContext, Task};
use sagabus_domain::logging::{TracingLogger, TracingLoggerProvider};
use sagabus_domain::message::{BusinessContext, Event, Message, MessageCategory};
use sagabus_domain::metadata::{
    DeclaredTag, InMemoryMetadataSource, InMemoryTypeCatalog, MethodAnnotation,
    ParameterDescriptor, SagaListenerTag,
};
use sagabus_domain::saga::SagaEventListenersReader;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct OrderPlaced {
    order_id: String,
    total_cents: u64,
}

impl Message for OrderPlaced {
    const NAME: &'static str = "shop.OrderPlaced";
    const CATEGORY: MessageCategory = MessageCategory::Event;
}

impl Event for OrderPlaced {}

struct OrderSagaListener;

#[async_trait]
impl MessageHandler<OrderPlaced> for OrderSagaListener {
    async fn handle(&self, ctx: &dyn ExecutionContext, ev: OrderPlaced) -> Result<(), AppError> {
        println!(
            "saga correlated by order_id={} (correlation={:?}, total={})",
            ev.order_id,
            ctx.business().correlation_id(),
            ev.total_cents
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .init();

    // 1) saga 元数据：一个合法监听器，一个缺少标识字段的监听器
    let metadata = InMemoryMetadataSource::new();
    let listener = |field: &str| {
        DeclaredTag::SagaListener(
            SagaListenerTag::builder()
                .identity_field(field)
                .identity_type("shop.OrderId")
                .build(),
        )
    };
    metadata.register(
        "shop.OrderSaga",
        vec![
            MethodAnnotation::new(
                "on_order_placed",
                listener("order_id"),
                vec![ParameterDescriptor::typed("event", OrderPlaced::NAME)],
            ),
            MethodAnnotation::new(
                "on_order_paid",
                listener(""),
                vec![ParameterDescriptor::typed("event", "shop.OrderPaid")],
            ),
        ],
    );

    let catalog = InMemoryTypeCatalog::new();
    catalog.register_type("shop.OrderId").register_event::<OrderPlaced>();

    let reader = SagaEventListenersReader::builder()
        .metadata(Arc::new(metadata))
        .catalog(Arc::new(catalog))
        .logger(Arc::new(TracingLogger::new("saga")))
        .build();
    let report = reader.extract_with_report("shop.OrderSaga")?;
    println!(
        "accepted={}, rejected={}, skipped={}",
        report.accepted.len(),
        report.rejected_count(),
        report.skipped
    );

    // 2) 以事件策略包装监听器并执行一条消息
    let cfg = ExecutionPolicyConfig::from_json(
        r#"{ "event": { "log_payload": true, "logger_channel": "sagas" } }"#,
    )?;
    let task = Task::new(
        cfg.policy(MessageCategory::Event),
        OrderSagaListener,
        Arc::new(TracingLoggerProvider),
    );

    let ctx = KernelContext::new(
        BusinessContext::builder()
            .correlation_id("cor-1".into())
            .build(),
    );
    task.execute(
        OrderPlaced {
            order_id: "o-1".into(),
            total_cents: 4200,
        },
        &ctx,
    )
    .await?;

    Ok(())
}
