//! Static catalog of report definitions.
//!
//! Declaration order matters: the classifier breaks score ties toward the
//! earlier entry. The builtin catalog covers every [`ReportType`] variant,
//! so a resolved type always finds its definition.

use serde::Serialize;
use vx_protocol::report::{EndpointType, OutputFormat, ReportType};

const JPE: &[OutputFormat] = &[OutputFormat::Json, OutputFormat::Pdf, OutputFormat::Excel];
const JSON_ONLY: &[OutputFormat] = &[OutputFormat::Json];

/// One catalog entry: display metadata, classifier trigger phrases, and
/// routing facts.
#[derive(Debug, Clone)]
pub struct ReportDefinition {
    pub report_type: ReportType,
    pub name: &'static str,
    pub description: &'static str,
    /// Trigger phrases for the fallback classifier, normalized form.
    pub keywords: &'static [&'static str],
    pub supports_ml: bool,
    /// Supported output formats; the first one is the downgrade target.
    pub formats: &'static [OutputFormat],
    pub endpoint_type: EndpointType,
    pub needs_customer: bool,
    pub needs_product: bool,
}

/// Caller-facing summary of one definition.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub id: ReportType,
    pub name: &'static str,
    pub description: &'static str,
    pub supports_ml: bool,
    pub formats: &'static [OutputFormat],
    pub endpoint_type: EndpointType,
}

/// Immutable, injectable report catalog.
#[derive(Debug, Clone)]
pub struct ReportCatalog {
    definitions: Vec<ReportDefinition>,
}

impl ReportCatalog {
    pub fn new(definitions: Vec<ReportDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[ReportDefinition] {
        &self.definitions
    }

    pub fn definition(&self, report_type: ReportType) -> Option<&ReportDefinition> {
        self.definitions
            .iter()
            .find(|d| d.report_type == report_type)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Summaries in declaration order, for "what can I ask for" listings.
    pub fn summaries(&self) -> Vec<ReportSummary> {
        self.definitions
            .iter()
            .map(|d| ReportSummary {
                id: d.report_type,
                name: d.name,
                description: d.description,
                supports_ml: d.supports_ml,
                formats: d.formats,
                endpoint_type: d.endpoint_type,
            })
            .collect()
    }

    /// The full production catalog.
    pub fn builtin() -> Self {
        fn def(
            report_type: ReportType,
            name: &'static str,
            description: &'static str,
            keywords: &'static [&'static str],
            endpoint_type: EndpointType,
        ) -> ReportDefinition {
            ReportDefinition {
                report_type,
                name,
                description,
                keywords,
                supports_ml: matches!(
                    endpoint_type,
                    EndpointType::MlPredictions
                        | EndpointType::MlProduct
                        | EndpointType::MlRecommendations
                        | EndpointType::MlDashboard
                ),
                formats: JPE,
                endpoint_type,
                needs_customer: endpoint_type == EndpointType::ClientSpecific,
                needs_product: endpoint_type == EndpointType::ProductSpecific,
            }
        }

        let mut definitions = vec![
            def(
                ReportType::VentasBasico,
                "Reporte Básico de Ventas",
                "Ventas generales sin agrupación específica",
                &["ventas general", "reporte de ventas", "historial ventas"],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::ComprasCliente,
                "Compras de Cliente Específico",
                "Historial completo de compras de un cliente en particular",
                &[
                    "compras del cliente",
                    "compras que realizo",
                    "historial de",
                    "pedidos del cliente",
                ],
                EndpointType::ClientSpecific,
            ),
            def(
                ReportType::ProductosCompradosPorCliente,
                "Productos Comprados por Cliente",
                "Lista de productos que ha comprado un cliente",
                &[
                    "productos que compro",
                    "que compro el cliente",
                    "articulos comprados",
                ],
                EndpointType::ClientSpecific,
            ),
            def(
                ReportType::AnalisisComportamientoCliente,
                "Análisis de Comportamiento del Cliente",
                "Análisis profundo del patrón de compra de un cliente",
                &[
                    "analisis de comportamiento",
                    "perfil de compra",
                    "patron de cliente",
                ],
                EndpointType::ClientSpecific,
            ),
            def(
                ReportType::TimelineComprasCliente,
                "Timeline de Compras del Cliente",
                "Línea de tiempo cronológica de las compras de un cliente",
                &["timeline", "linea de tiempo", "cronologia de compras"],
                EndpointType::ClientSpecific,
            ),
            def(
                ReportType::ClientesQueCompraronProducto,
                "Clientes que Compraron Producto",
                "Lista de clientes que compraron un producto específico",
                &[
                    "clientes que compraron",
                    "quienes compraron",
                    "quien compro",
                ],
                EndpointType::ProductSpecific,
            ),
            def(
                ReportType::VentasProductoEspecifico,
                "Ventas de Producto Específico",
                "Historial de ventas de un producto en particular",
                &[
                    "ventas de producto",
                    "ventas del producto",
                    "historial del producto",
                ],
                EndpointType::ProductSpecific,
            ),
            def(
                ReportType::ProductosMasVendidos,
                "Productos Más Vendidos",
                "Top de productos con más unidades vendidas",
                &["productos mas vendidos", "top productos", "best sellers"],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::VentasPorRangoPrecio,
                "Ventas por Rango de Precio",
                "Ventas filtradas por rango de precio",
                &["entre", "mas de", "menos de", "precio"],
                EndpointType::PriceFiltered,
            ),
            def(
                ReportType::ProductosMasCarosVendidos,
                "Productos Más Caros Vendidos",
                "Top productos de mayor precio vendidos",
                &[
                    "productos mas caros",
                    "mas caros vendidos",
                    "premium vendidos",
                ],
                EndpointType::PriceFiltered,
            ),
            def(
                ReportType::ComparativaClientes,
                "Comparativa entre Clientes",
                "Compara el comportamiento de compra de múltiples clientes",
                &["comparar clientes", "comparativa de clientes"],
                EndpointType::Comparative,
            ),
            def(
                ReportType::ComparativaProductos,
                "Comparativa entre Productos",
                "Compara las ventas de múltiples productos",
                &["comparar productos", "comparativa de productos"],
                EndpointType::Comparative,
            ),
            def(
                ReportType::VentasPorProducto,
                "Ventas por Producto",
                "Ventas agrupadas por producto con estadísticas",
                &[
                    "ventas por producto",
                    "productos vendidos",
                    "reporte productos",
                ],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::VentasPorCliente,
                "Ventas por Cliente",
                "Ventas agrupadas por cliente",
                &["ventas por cliente", "clientes", "mejores clientes"],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::VentasPorCategoria,
                "Ventas por Categoría",
                "Ventas agrupadas por categoría de producto",
                &["ventas por categoria", "categorias"],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::VentasPorCategoriaEspecifica,
                "Ventas de Categoría Específica",
                "Ventas de una sola categoría de producto",
                &[
                    "ventas de la categoria",
                    "ventas en la categoria",
                    "categoria especifica",
                ],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::VentasPorFecha,
                "Ventas por Fecha",
                "Ventas día a día",
                &["ventas por fecha", "ventas diarias", "por dia"],
                EndpointType::BasicDynamic,
            ),
            def(
                ReportType::AnalisisRfm,
                "Análisis RFM de Clientes",
                "Segmentación de clientes (VIP, Regular, En Riesgo, etc.)",
                &["analisis rfm", "segmentacion clientes", "rfm", "clientes vip"],
                EndpointType::Advanced,
            ),
            def(
                ReportType::AnalisisAbc,
                "Análisis ABC de Productos",
                "Clasificación de productos por el principio de Pareto (80/20)",
                &["analisis abc", "pareto", "clasificacion productos", "abc"],
                EndpointType::Advanced,
            ),
            def(
                ReportType::ComparativoTemporal,
                "Reporte Comparativo",
                "Comparación entre dos períodos de tiempo",
                &["comparativo", "comparar periodos", "comparacion"],
                EndpointType::Advanced,
            ),
            def(
                ReportType::DashboardEjecutivo,
                "Dashboard Ejecutivo",
                "KPIs principales y alertas del negocio",
                &[
                    "dashboard ejecutivo",
                    "dashboard",
                    "kpis",
                    "resumen ejecutivo",
                ],
                EndpointType::Advanced,
            ),
            def(
                ReportType::AnalisisInventario,
                "Análisis de Inventario",
                "Estado del inventario con rotación y alertas",
                &["inventario", "stock", "analisis inventario"],
                EndpointType::Advanced,
            ),
            def(
                ReportType::PrediccionVentas,
                "Predicción de Ventas (ML)",
                "Predicciones futuras de ventas usando Machine Learning",
                &[
                    "prediccion",
                    "predicciones",
                    "forecast",
                    "pronostico",
                    "ventas futuras",
                ],
                EndpointType::MlPredictions,
            ),
            def(
                ReportType::PrediccionProducto,
                "Predicción por Producto (ML)",
                "Predicciones de ventas para productos específicos",
                &[
                    "prediccion producto",
                    "prediccion por producto",
                    "forecast producto",
                ],
                EndpointType::MlProduct,
            ),
            def(
                ReportType::Recomendaciones,
                "Sistema de Recomendaciones (ML)",
                "Recomendaciones personalizadas de productos",
                &["recomendaciones", "recomendar", "sugerencias"],
                EndpointType::MlRecommendations,
            ),
            def(
                ReportType::DashboardMl,
                "Dashboard de Predicciones ML",
                "Dashboard completo con predicciones y análisis ML",
                &["dashboard ml", "dashboard predicciones", "ml dashboard"],
                EndpointType::MlDashboard,
            ),
        ];

        // JSON-only deliveries: interactive dashboards and the ML types
        // without a tabular export.
        for definition in &mut definitions {
            if matches!(
                definition.report_type,
                ReportType::DashboardEjecutivo
                    | ReportType::PrediccionProducto
                    | ReportType::Recomendaciones
                    | ReportType::DashboardMl
            ) {
                definition.formats = JSON_ONLY;
            }
        }

        Self::new(definitions)
    }
}

impl Default for ReportCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
