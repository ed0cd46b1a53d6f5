use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use slidefx_api_core::{
    AttributeKind, AttributeLayerRef, AttributeValue, Rect, Shape, ShapeAttributeLayer, ShapeId,
    Size,
};

use crate::layer::TestAttributeLayer;

/// In-memory shape whose current bounds follow its attribute layer.
#[derive(Debug)]
pub struct TestShape {
    id: ShapeId,
    dom_bounds: Rect,
    visible: bool,
    defaults: HashMap<AttributeKind, AttributeValue>,
    layer: Rc<RefCell<TestAttributeLayer>>,
    painted_state: Cell<u64>,
}

impl TestShape {
    pub fn new(id: u64, dom_bounds: Rect) -> Self {
        Self {
            id: ShapeId(id),
            dom_bounds,
            visible: true,
            defaults: HashMap::new(),
            layer: Rc::new(RefCell::new(TestAttributeLayer::new())),
            painted_state: Cell::new(0),
        }
    }

    pub fn with_default(mut self, kind: AttributeKind, value: AttributeValue) -> Self {
        self.defaults.insert(kind, value);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Concrete layer, for assertions.
    pub fn layer(&self) -> Rc<RefCell<TestAttributeLayer>> {
        self.layer.clone()
    }

    /// The same layer as the trait object adapters expect.
    pub fn layer_ref(&self) -> AttributeLayerRef {
        self.layer.clone()
    }

    /// Record that the current layer state has been rendered.
    pub fn mark_painted(&self) {
        self.painted_state.set(self.layer.borrow().state_id());
    }
}

impl Shape for TestShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let layer = self.layer.borrow();
        let dom_center = self.dom_bounds.center();
        let center = (
            if layer.is_pos_x_valid() {
                layer.pos_x()
            } else {
                dom_center.x
            },
            if layer.is_pos_y_valid() {
                layer.pos_y()
            } else {
                dom_center.y
            },
        );
        let size = Size::new(
            if layer.is_width_valid() {
                layer.width()
            } else {
                self.dom_bounds.width()
            },
            if layer.is_height_valid() {
                layer.height()
            } else {
                self.dom_bounds.height()
            },
        );
        Rect::from_center_size(center, size)
    }

    fn dom_bounds(&self) -> Rect {
        self.dom_bounds
    }

    fn is_content_changed(&self) -> bool {
        self.layer.borrow().state_id() != self.painted_state.get()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn property_default(&self, kind: AttributeKind) -> Option<AttributeValue> {
        self.defaults.get(&kind).cloned()
    }
}
