//! Adapter over the external map widget.
//!
//! Pages never call into widget internals: they hand the adapter a list of
//! marker specs and register typed callbacks; the JS bridge translates native
//! widget events into `MapEvent`s through `emit`. The adapter is the one
//! resource a page must release in its teardown.

use contracts::waste::{CollectionKind, WasteCollection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerKind {
    Single,
    /// Several collections at the same address; payload is the member count.
    Cluster(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    /// Id of the (first) collection behind the marker.
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub kind: MarkerKind,
    /// Pre-rendered overlay card; user-controlled fields are escaped upstream.
    pub overlay_html: String,
}

/// Domain events the widget bridge may raise.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    MarkerClicked { marker_id: i64 },
    AddressResolved { address: Option<String> },
}

type MapListener = Arc<dyn Fn(&MapEvent) + Send + Sync>;

#[derive(Default)]
struct MapAdapterInner {
    markers: Vec<MarkerSpec>,
    listeners: Vec<MapListener>,
    destroyed: bool,
}

#[derive(Clone, Default)]
pub struct MapAdapter {
    inner: Arc<Mutex<MapAdapterInner>>,
}

impl MapAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event(&self, listener: impl Fn(&MapEvent) + Send + Sync + 'static) {
        if let Ok(mut inner) = self.inner.lock() {
            if !inner.destroyed {
                inner.listeners.push(Arc::new(listener));
            }
        }
    }

    /// Called by the widget bridge (and by tests). No-op after `destroy`.
    pub fn emit(&self, event: MapEvent) {
        let listeners: Vec<MapListener> = match self.inner.lock() {
            Ok(inner) if !inner.destroyed => inner.listeners.clone(),
            _ => return,
        };
        // Lock released before dispatch so a listener may call back in.
        for listener in listeners {
            listener(&event);
        }
    }

    pub fn set_markers(&self, markers: Vec<MarkerSpec>) {
        if let Ok(mut inner) = self.inner.lock() {
            if !inner.destroyed {
                inner.markers = markers;
            }
        }
    }

    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.inner
            .lock()
            .map(|inner| inner.markers.clone())
            .unwrap_or_default()
    }

    /// Release the widget. Safe to call multiple times.
    pub fn destroy(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.destroyed = true;
            inner.listeners.clear();
            inner.markers.clear();
        }
    }
}

/// Groups collections the way the map displays them: field records always get
/// their own marker; online submissions at the same (trimmed) address share
/// one. Order follows first appearance, so repeated renders are identical.
pub fn group_by_address(collections: &[WasteCollection]) -> Vec<Vec<WasteCollection>> {
    let mut groups: Vec<Vec<WasteCollection>> = Vec::new();
    let mut online_index: HashMap<String, usize> = HashMap::new();

    for collection in collections {
        match collection.kind {
            CollectionKind::Field => groups.push(vec![collection.clone()]),
            CollectionKind::Online => {
                let key = collection.address.trim().to_string();
                match online_index.get(&key) {
                    Some(&i) => groups[i].push(collection.clone()),
                    None => {
                        online_index.insert(key, groups.len());
                        groups.push(vec![collection.clone()]);
                    }
                }
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn collection(id: i64, kind: CollectionKind, address: &str) -> WasteCollection {
        WasteCollection {
            id,
            kind,
            address: address.to_string(),
            latitude: 37.34,
            longitude: 126.74,
            fee: 5000,
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn online_collections_group_by_trimmed_address() {
        let data = vec![
            collection(1, CollectionKind::Online, "중앙로 1 "),
            collection(2, CollectionKind::Online, "중앙로 1"),
            collection(3, CollectionKind::Online, "중앙로 2"),
        ];
        let groups = group_by_address(&data);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn field_collections_are_never_clustered() {
        let data = vec![
            collection(1, CollectionKind::Field, "중앙로 1"),
            collection(2, CollectionKind::Field, "중앙로 1"),
        ];
        let groups = group_by_address(&data);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let data = vec![
            collection(1, CollectionKind::Online, "B"),
            collection(2, CollectionKind::Online, "A"),
            collection(3, CollectionKind::Online, "B"),
        ];
        let groups = group_by_address(&data);
        assert_eq!(groups[0][0].address, "B");
        assert_eq!(groups[1][0].address, "A");
    }

    #[test]
    fn destroyed_adapter_ignores_events_and_markers() {
        let adapter = MapAdapter::new();
        let hits = Arc::new(Mutex::new(0));
        {
            let hits = hits.clone();
            adapter.on_event(move |_| *hits.lock().unwrap() += 1);
        }

        adapter.emit(MapEvent::MarkerClicked { marker_id: 1 });
        assert_eq!(*hits.lock().unwrap(), 1);

        adapter.destroy();
        adapter.destroy(); // idempotent
        adapter.emit(MapEvent::MarkerClicked { marker_id: 1 });
        assert_eq!(*hits.lock().unwrap(), 1);

        adapter.set_markers(vec![MarkerSpec {
            id: 1,
            latitude: 0.0,
            longitude: 0.0,
            kind: MarkerKind::Single,
            overlay_html: String::new(),
        }]);
        assert!(adapter.markers().is_empty());
    }
}
