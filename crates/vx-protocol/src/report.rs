//! Report type, endpoint family, and output format enums.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Closed catalog of business report types.
///
/// Variant order matters: the fallback classifier breaks score ties by
/// declaration order, so the more specific entries come first within each
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    VentasBasico,
    // Client-specific
    ComprasCliente,
    ProductosCompradosPorCliente,
    AnalisisComportamientoCliente,
    TimelineComprasCliente,
    // Product-specific
    ClientesQueCompraronProducto,
    VentasProductoEspecifico,
    ProductosMasVendidos,
    // Price-filtered
    VentasPorRangoPrecio,
    ProductosMasCarosVendidos,
    // Comparative
    ComparativaClientes,
    ComparativaProductos,
    // Grouped sales
    VentasPorProducto,
    VentasPorCliente,
    VentasPorCategoria,
    VentasPorCategoriaEspecifica,
    VentasPorFecha,
    // Advanced analytics
    AnalisisRfm,
    AnalisisAbc,
    ComparativoTemporal,
    DashboardEjecutivo,
    AnalisisInventario,
    // ML-backed
    PrediccionVentas,
    PrediccionProducto,
    Recomendaciones,
    DashboardMl,
}

impl ReportType {
    /// Every variant, in declaration order.
    pub const ALL: [ReportType; 26] = [
        Self::VentasBasico,
        Self::ComprasCliente,
        Self::ProductosCompradosPorCliente,
        Self::AnalisisComportamientoCliente,
        Self::TimelineComprasCliente,
        Self::ClientesQueCompraronProducto,
        Self::VentasProductoEspecifico,
        Self::ProductosMasVendidos,
        Self::VentasPorRangoPrecio,
        Self::ProductosMasCarosVendidos,
        Self::ComparativaClientes,
        Self::ComparativaProductos,
        Self::VentasPorProducto,
        Self::VentasPorCliente,
        Self::VentasPorCategoria,
        Self::VentasPorCategoriaEspecifica,
        Self::VentasPorFecha,
        Self::AnalisisRfm,
        Self::AnalisisAbc,
        Self::ComparativoTemporal,
        Self::DashboardEjecutivo,
        Self::AnalisisInventario,
        Self::PrediccionVentas,
        Self::PrediccionProducto,
        Self::Recomendaciones,
        Self::DashboardMl,
    ];

    /// Stable snake_case identifier, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VentasBasico => "ventas_basico",
            Self::ComprasCliente => "compras_cliente",
            Self::ProductosCompradosPorCliente => "productos_comprados_por_cliente",
            Self::AnalisisComportamientoCliente => "analisis_comportamiento_cliente",
            Self::TimelineComprasCliente => "timeline_compras_cliente",
            Self::ClientesQueCompraronProducto => "clientes_que_compraron_producto",
            Self::VentasProductoEspecifico => "ventas_producto_especifico",
            Self::ProductosMasVendidos => "productos_mas_vendidos",
            Self::VentasPorRangoPrecio => "ventas_por_rango_precio",
            Self::ProductosMasCarosVendidos => "productos_mas_caros_vendidos",
            Self::ComparativaClientes => "comparativa_clientes",
            Self::ComparativaProductos => "comparativa_productos",
            Self::VentasPorProducto => "ventas_por_producto",
            Self::VentasPorCliente => "ventas_por_cliente",
            Self::VentasPorCategoria => "ventas_por_categoria",
            Self::VentasPorCategoriaEspecifica => "ventas_por_categoria_especifica",
            Self::VentasPorFecha => "ventas_por_fecha",
            Self::AnalisisRfm => "analisis_rfm",
            Self::AnalisisAbc => "analisis_abc",
            Self::ComparativoTemporal => "comparativo_temporal",
            Self::DashboardEjecutivo => "dashboard_ejecutivo",
            Self::AnalisisInventario => "analisis_inventario",
            Self::PrediccionVentas => "prediccion_ventas",
            Self::PrediccionProducto => "prediccion_producto",
            Self::Recomendaciones => "recomendaciones",
            Self::DashboardMl => "dashboard_ml",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator-strategy family a report type routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    BasicDynamic,
    ClientSpecific,
    ProductSpecific,
    PriceFiltered,
    Comparative,
    Advanced,
    MlPredictions,
    MlProduct,
    MlRecommendations,
    MlDashboard,
}

impl EndpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicDynamic => "basic_dynamic",
            Self::ClientSpecific => "client_specific",
            Self::ProductSpecific => "product_specific",
            Self::PriceFiltered => "price_filtered",
            Self::Comparative => "comparative",
            Self::Advanced => "advanced",
            Self::MlPredictions => "ml_predictions",
            Self::MlProduct => "ml_product",
            Self::MlRecommendations => "ml_recommendations",
            Self::MlDashboard => "ml_dashboard",
        }
    }
}

impl std::fmt::Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested delivery format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Pdf,
    Excel,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown output format: {0}")]
pub struct FormatParseError(pub String);

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            "excel" | "xlsx" | "xls" => Ok(Self::Excel),
            other => Err(FormatParseError(other.to_string())),
        }
    }
}
